//! Search results grid.
//!
//! Stateless. Tiles are keyed by position, which holds only because the
//! whole list is replaced on every search.

use collector_core::SearchResultItem;
use dioxus::prelude::*;

use super::AddToCollectionButton;

#[component]
pub fn ResultsGrid(
    /// Results of the last successful search
    items: Vec<SearchResultItem>,
    /// Called with the new entry id after a card is added
    on_add: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "card-grid card-grid--results",
            for (i, item) in items.into_iter().enumerate() {
                div { key: "{i}", class: "card-tile",
                    div { class: "card-tile__art",
                        if let Some(url) = item.image() {
                            img {
                                src: "{url}",
                                alt: "{item.alt_text()}",
                                class: "card-tile__img",
                            }
                        } else {
                            div { class: "card-tile__placeholder", "No image" }
                        }
                    }
                    div { class: "card-tile__meta",
                        div {
                            class: "card-tile__name",
                            title: item.name.clone().unwrap_or_default(),
                            "{item.display_name()}"
                        }
                        div { class: "card-tile__subtitle", "{item.subtitle()}" }
                    }
                    AddToCollectionButton { item: item.clone(), on_add: on_add }
                }
            }
        }
    }
}

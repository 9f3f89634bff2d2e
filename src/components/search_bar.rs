//! Search bar component.
//!
//! Issues one marketplace search per click or Enter. Errors are shown
//! inline next to the input.

use collector_core::{CollectorApi, SearchResultItem, SearchState};
use dioxus::prelude::*;

use crate::context::use_api;

#[component]
pub fn SearchBar(on_results: EventHandler<Vec<SearchResultItem>>) -> Element {
    let api = use_api();
    let mut state = use_signal(SearchState::new);

    let search = use_callback(move |_: ()| {
        let Some(query) = state.write().begin() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.search(&query).await;
            let items = state.write().finish(result);
            if let Some(items) = items {
                on_results.call(items);
            }
        });
    });

    let current = state.read().clone();

    rsx! {
        div { class: "search-bar",
            input {
                class: "input-field search-bar__input",
                placeholder: "Search by name or ID (e.g., OP05-119)",
                value: "{current.query}",
                oninput: move |e| state.write().set_query(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        search.call(());
                    }
                },
            }
            button {
                class: "btn-primary",
                onclick: move |_| search.call(()),
                "Search"
            }
            if current.loading {
                span { class: "search-bar__loading", "Loading..." }
            }
            if let Some(err) = current.error.clone() {
                span { class: "search-bar__error", "{err}" }
            }
        }
    }
}

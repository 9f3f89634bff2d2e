//! Collection dashboard component.
//!
//! Loads the collection on mount, converts the total spent on currency
//! changes and renders three tabs. Only the Collection tab is backed by
//! data; Market Watch and Trending show fixed copy and never fetch.

use collector_core::{CollectorApi, Currency, Dashboard, DashboardTab, RateFetch};
use dioxus::prelude::*;

use super::{CurrencyToggle, UploadCustomImage};
use crate::context::use_api;

#[component]
pub fn CollectionList() -> Element {
    let api = use_api();
    let mut dashboard = use_signal(Dashboard::new);

    // Load collection on mount; failures show an empty collection
    let api_for_load = api.clone();
    use_effect(move || {
        let api = api_for_load.clone();
        spawn(async move {
            let result = api.list_collection().await;
            dashboard.write().apply_collection(result);
        });
    });

    // Rate is recomputed only in response to a currency selection
    let on_currency = move |currency: Currency| {
        let fetch = dashboard.write().select_currency(currency);
        if let RateFetch::Needed { from, to } = fetch {
            let api = api.clone();
            spawn(async move {
                let result = api.conversion_rate(from, to).await;
                dashboard.write().apply_rate(result);
            });
        }
    };

    let state = dashboard.read();
    let tab = state.tab;
    let currency = state.currency;
    let total = state.formatted_total();
    let entries = state.entries.clone();
    drop(state);

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard__toolbar",
                div { class: "tab-bar",
                    for candidate in DashboardTab::ALL {
                        button {
                            key: "{candidate.label()}",
                            class: if candidate == tab { "tab active" } else { "tab" },
                            onclick: move |_| dashboard.write().select_tab(candidate),
                            "{candidate.label()}"
                        }
                    }
                }
                CurrencyToggle { currency: currency, on_change: on_currency }
            }

            if tab == DashboardTab::Collection {
                div {
                    div { class: "total-card",
                        div { class: "total-card__label", "Total spent" }
                        div { class: "total-card__value", "{total}" }
                    }
                    div { class: "card-grid card-grid--collection",
                        for entry in entries {
                            div { key: "{entry.id}", class: "card-tile",
                                div { class: "card-tile__art",
                                    img {
                                        src: entry.display_image().unwrap_or_default().to_string(),
                                        alt: entry.name.clone().unwrap_or_default(),
                                        class: "card-tile__img",
                                    }
                                }
                                div {
                                    class: "card-tile__name",
                                    title: entry.name.clone().unwrap_or_default(),
                                    "{entry.display_name()}"
                                }
                                div { class: "card-tile__subtitle", "{entry.subtitle()}" }
                                UploadCustomImage {
                                    entry_id: entry.id.clone(),
                                    on_uploaded: {
                                        let entry_id = entry.id.clone();
                                        move |url: String| {
                                            dashboard.write().patch_custom_image(&entry_id, &url);
                                        }
                                    },
                                }
                            }
                        }
                    }
                }
            } else if let Some(copy) = tab.placeholder() {
                div { class: "tab-placeholder", "{copy}" }
            }
        }
    }
}

use collector_core::{HttpApi, SearchResultItem};
use dioxus::prelude::*;

use crate::components::{CollectionList, ResultsGrid, SearchBar};
use crate::context::get_backend_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the backend client, and lays out the page:
/// card search on top, the collection dashboard below. Search results live
/// here and are replaced wholesale by every successful search.
#[component]
pub fn App() -> Element {
    use_context_provider(|| HttpApi::new(get_backend_config()));

    let mut results = use_signal(Vec::<SearchResultItem>::new);

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "app",
            header { class: "app-header",
                div { class: "app-header__inner",
                    h1 { class: "page-title", "OPTCG Collector" }
                    nav { class: "app-header__tagline",
                        "Inspired by packmagik · Focused on collectors"
                    }
                }
            }

            main { class: "app-main",
                section { class: "panel",
                    h2 { class: "section-header", "Find cards" }
                    SearchBar { on_results: move |items| results.set(items) }
                    ResultsGrid { items: results(), on_add: move |id: String| tracing::debug!(%id, "card added") }
                }

                section { class: "dashboard-section",
                    h2 { class: "section-header", "Dashboard" }
                    CollectionList {}
                }
            }

            footer { class: "app-footer",
                "Prices and images are fetched from listing sources. No fabricated price data. If unavailable: N/A."
            }
        }
    }
}

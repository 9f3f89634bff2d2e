//! USD/EUR switch.

use collector_core::Currency;
use dioxus::prelude::*;

/// Two-state currency switch. Emits the newly selected currency.
#[component]
pub fn CurrencyToggle(currency: Currency, on_change: EventHandler<Currency>) -> Element {
    let is_eur = currency == Currency::Eur;

    rsx! {
        div { class: "currency-toggle",
            span { class: label_class(!is_eur), "USD" }
            label { class: "switch",
                input {
                    r#type: "checkbox",
                    class: "switch__input",
                    checked: is_eur,
                    onchange: move |e: FormEvent| {
                        on_change.call(if e.checked() { Currency::Eur } else { Currency::Usd })
                    },
                }
                div { class: if is_eur { "switch__track on" } else { "switch__track" },
                    div { class: "switch__knob" }
                }
            }
            span { class: label_class(is_eur), "EUR" }
        }
    }
}

fn label_class(active: bool) -> &'static str {
    if active {
        "currency-label active"
    } else {
        "currency-label"
    }
}

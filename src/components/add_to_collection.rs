//! Add-to-collection control shown under every search result.

use collector_core::{AddForm, CollectorApi, Currency, SearchResultItem};
use dioxus::prelude::*;

use crate::context::{alert, use_api};

/// Price, currency and quantity inputs plus an Add button for one item.
///
/// An empty price does nothing. A failed save raises a blocking alert and
/// keeps the typed values; a successful one clears the price and resets the
/// quantity to 1.
#[component]
pub fn AddToCollectionButton(
    item: SearchResultItem,
    on_add: EventHandler<String>,
) -> Element {
    let api = use_api();
    let mut form = use_signal(AddForm::new);

    let add = move |_| {
        let Some(entry) = form.write().begin(&item) else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            let result = api.add_to_collection(&entry).await;
            let outcome = form.write().finish(result);
            match outcome {
                Ok(id) => on_add.call(id),
                Err(e) => alert(e.to_string()).await,
            }
        });
    };

    let current = form.read().clone();

    rsx! {
        div { class: "add-form",
            input {
                class: "input-field input-field--small add-form__price",
                placeholder: "Buy price",
                value: "{current.price}",
                oninput: move |e| form.write().price = e.value(),
            }
            select {
                class: "select-field",
                value: "{current.currency}",
                onchange: move |e| {
                    if let Ok(currency) = e.value().parse::<Currency>() {
                        form.write().currency = currency;
                    }
                },
                for currency in Currency::ALL {
                    option {
                        value: "{currency}",
                        selected: currency == current.currency,
                        "{currency}"
                    }
                }
            }
            input {
                r#type: "number",
                min: "1",
                class: "input-field input-field--small add-form__qty",
                value: "{current.quantity}",
                oninput: move |e| form.write().set_quantity_input(&e.value()),
            }
            button {
                class: "btn-add",
                disabled: current.saving,
                onclick: add,
                if current.saving { "Saving..." } else { "Add" }
            }
        }
    }
}

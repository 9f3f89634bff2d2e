//! Add-to-collection form state.
//!
//! Price is parsed leniently from its leading numeric text. A price with no
//! numeric prefix becomes NaN and is still submitted (it serializes as JSON
//! `null`); there is intentionally no validation beyond that.

use crate::api::CollectorApi;
use crate::error::CollectorResult;
use crate::types::{CreatedEntry, Currency, NewCollectionEntry, SearchResultItem};

/// Form state for one search result's add control.
#[derive(Debug, Clone, PartialEq)]
pub struct AddForm {
    pub price: String,
    pub currency: Currency,
    pub quantity: i64,
    pub saving: bool,
}

impl Default for AddForm {
    fn default() -> Self {
        Self {
            price: String::new(),
            currency: Currency::Usd,
            quantity: 1,
            saving: false,
        }
    }
}

impl AddForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Integer quantity from raw input; 1 when nothing parses.
    pub fn set_quantity_input(&mut self, input: &str) {
        self.quantity = parse_int_prefix(input).unwrap_or(1);
    }

    /// Start a save. `None` (and no state change) when the price is empty.
    pub fn begin(&mut self, item: &SearchResultItem) -> Option<NewCollectionEntry> {
        if self.price.is_empty() {
            return None;
        }
        self.saving = true;
        Some(NewCollectionEntry::from_item(
            item,
            parse_float_prefix(&self.price),
            self.currency,
            self.quantity,
        ))
    }

    /// Complete a save. On success the form resets and the new id is
    /// returned; the currency selection is kept.
    pub fn finish(&mut self, result: CollectorResult<CreatedEntry>) -> CollectorResult<String> {
        self.saving = false;
        let created = result?;
        self.price.clear();
        self.quantity = 1;
        tracing::info!(id = %created.id, "added card to collection");
        Ok(created.id)
    }

    /// Run a full save cycle. `Ok(None)` when nothing was submitted.
    pub async fn run<A: CollectorApi>(
        &mut self,
        api: &A,
        item: &SearchResultItem,
    ) -> CollectorResult<Option<String>> {
        let Some(entry) = self.begin(item) else {
            return Ok(None);
        };
        let result = api.add_to_collection(&entry).await;
        self.finish(result).map(Some)
    }
}

/// Longest numeric prefix after leading whitespace, or NaN.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let numeric_len = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')))
        .unwrap_or(s.len());
    let candidate = &s[..numeric_len];

    (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Optional sign followed by leading digits, after leading whitespace.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let digits_len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_len].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CollectorError;
    use crate::test_support::FakeApi;

    fn example_item() -> SearchResultItem {
        SearchResultItem {
            id_code: Some("OP05-119".to_string()),
            name: Some("Example Card".to_string()),
            image_url: Some("http://x/img.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("12.50"), 12.5);
        assert_eq!(parse_float_prefix("  3"), 3.0);
        assert_eq!(parse_float_prefix("7.25 EUR"), 7.25);
        assert_eq!(parse_float_prefix("1e2"), 100.0);
        assert_eq!(parse_float_prefix("4e"), 4.0);
        assert!(parse_float_prefix("abc").is_nan());
        assert!(parse_float_prefix("nan").is_nan());
        assert!(parse_float_prefix("inf").is_nan());
    }

    #[test]
    fn test_quantity_input() {
        let mut form = AddForm::new();
        form.set_quantity_input("3");
        assert_eq!(form.quantity, 3);
        form.set_quantity_input("");
        assert_eq!(form.quantity, 1);
        form.set_quantity_input("x");
        assert_eq!(form.quantity, 1);
        form.set_quantity_input("250pcs");
        assert_eq!(form.quantity, 250);
    }

    #[test]
    fn test_empty_price_is_noop() {
        let mut form = AddForm {
            quantity: 4,
            currency: Currency::Eur,
            ..AddForm::new()
        };
        let before = form.clone();
        assert!(form.begin(&example_item()).is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn test_failure_keeps_form_values() {
        let mut form = AddForm {
            price: "5".to_string(),
            quantity: 2,
            ..AddForm::new()
        };
        form.begin(&example_item());
        assert!(form.saving);

        let err = form.finish(Err(CollectorError::SaveFailed)).unwrap_err();
        assert_eq!(err.to_string(), "Save failed");
        assert!(!form.saving);
        assert_eq!(form.price, "5");
        assert_eq!(form.quantity, 2);
    }

    #[tokio::test]
    async fn test_add_submits_and_resets() {
        let api = FakeApi::new().with_created_id("abc123");
        let mut form = AddForm::new();
        form.price = "12.50".to_string();
        form.currency = Currency::Eur;
        form.set_quantity_input("2");

        let id = form.run(&api, &example_item()).await.unwrap();
        assert_eq!(id.as_deref(), Some("abc123"));

        let calls = api.calls();
        assert_eq!(calls.added.len(), 1);
        let body = serde_json::to_value(&calls.added[0]).unwrap();
        assert_eq!(body["purchase_price"], 12.5);
        assert_eq!(body["purchase_currency"], "EUR");
        assert_eq!(body["quantity"], 2);
        assert_eq!(body["source"], "cardmarket");
        assert_eq!(body["id_code"], "OP05-119");

        assert_eq!(form.price, "");
        assert_eq!(form.quantity, 1);
        assert!(!form.saving);
    }

    #[tokio::test]
    async fn test_empty_price_issues_no_request() {
        let api = FakeApi::new();
        let mut form = AddForm::new();

        assert_eq!(form.run(&api, &example_item()).await.unwrap(), None);
        assert!(api.calls().added.is_empty());
    }

    #[tokio::test]
    async fn test_non_numeric_price_still_submitted() {
        let api = FakeApi::new();
        let mut form = AddForm::new();
        form.price = "cheap".to_string();

        form.run(&api, &example_item()).await.unwrap();
        let calls = api.calls();
        assert!(calls.added[0].purchase_price.is_nan());
    }
}

//! Wire and display types for the collection backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::CollectorError;

/// Source tag sent with every new collection entry.
pub const SOURCE_CARDMARKET: &str = "cardmarket";

/// Fallback shown for a missing id code or language.
pub const MISSING_FIELD: &str = "—";

/// Display currency and purchase currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Eur];

    /// ISO code as sent to the backend
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CollectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            _ => Err(CollectorError::UnknownCurrency(s.to_string())),
        }
    }
}

/// One hit from the marketplace search. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResultItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source_url: Option<String>,
}

impl SearchResultItem {
    /// Name or "Unknown"
    pub fn display_name(&self) -> &str {
        non_empty(&self.name).unwrap_or("Unknown")
    }

    /// `"{id_code} · {language}"` with "—" for missing parts
    pub fn subtitle(&self) -> String {
        subtitle(&self.id_code, &self.language)
    }

    /// Alt text for the tile image: name, then id code
    pub fn alt_text(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.id_code))
            .unwrap_or_default()
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }
}

/// A persisted card purchase as returned by `GET /api/collection`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CollectionEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub id_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub purchase_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub purchase_currency: Option<String>,
}

impl CollectionEntry {
    /// Price times quantity. Missing or NaN price counts as 0, missing or
    /// zero quantity counts as 1.
    pub fn cost(&self) -> f64 {
        let price = self.purchase_price.filter(|p| !p.is_nan()).unwrap_or(0.0);
        let quantity = match self.quantity {
            Some(q) if q != 0.0 && !q.is_nan() => q,
            _ => 1.0,
        };
        price * quantity
    }

    /// Custom image if one was uploaded, else the marketplace image
    pub fn display_image(&self) -> Option<&str> {
        non_empty(&self.custom_image_url).or_else(|| non_empty(&self.image_url))
    }

    /// Name, then id code
    pub fn display_name(&self) -> &str {
        non_empty(&self.name)
            .or_else(|| non_empty(&self.id_code))
            .unwrap_or_default()
    }

    pub fn subtitle(&self) -> String {
        subtitle(&self.id_code, &self.language)
    }
}

/// Body of `POST /api/collection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCollectionEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub source: &'static str,
    pub quantity: i64,
    /// NaN when the typed price is not a number; serializes as `null`
    pub purchase_price: f64,
    pub purchase_currency: Currency,
}

impl NewCollectionEntry {
    pub fn from_item(item: &SearchResultItem, price: f64, currency: Currency, quantity: i64) -> Self {
        Self {
            id_code: item.id_code.clone(),
            name: item.name.clone(),
            language: item.language.clone(),
            image_url: item.image_url.clone(),
            source_url: item.source_url.clone(),
            source: SOURCE_CARDMARKET,
            quantity,
            purchase_price: price,
            purchase_currency: currency,
        }
    }
}

/// Response of `POST /api/collection`; other echoed fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedEntry {
    #[serde(rename = "_id")]
    pub id: String,
}

/// Response of `GET /api/rate`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct ConversionRate {
    #[serde(default)]
    pub rate: Option<f64>,
}

/// Response of `PUT /api/collection/{id}/image`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedImage {
    pub custom_image_url: String,
}

/// Dashboard tabs. Only `Collection` is backed by data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Collection,
    Market,
    Trending,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Collection,
        DashboardTab::Market,
        DashboardTab::Trending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Collection => "Collection",
            DashboardTab::Market => "Market Watch",
            DashboardTab::Trending => "Trendings",
        }
    }

    /// Static copy for the tabs that have no data source yet
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            DashboardTab::Collection => None,
            DashboardTab::Market => Some(
                "Market Watch data will be populated from listing sources. Filters and charts \
                 will appear here without fake prices. If a metric is unavailable it will show N/A.",
            ),
            DashboardTab::Trending => Some(
                "Trending charts will reflect live data ranges (1w, 1m, 3m, 1y, Max) as available \
                 from sources. No fabricated prices will be shown.",
            ),
        }
    }
}

/// Any JSON scalar as text. Objects, arrays and null decode as `None`.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Integer, float or numeric string. Anything else decodes as `None`.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn subtitle(id_code: &Option<String>, language: &Option<String>) -> String {
    format!(
        "{} · {}",
        non_empty(id_code).unwrap_or(MISSING_FIELD),
        non_empty(language).unwrap_or(MISSING_FIELD)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parse_and_display() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("GBP".parse::<Currency>().is_err());
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Eur.symbol(), "€");
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Usd).unwrap(), "\"USD\"");
        let c: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(c, Currency::Eur);
    }

    #[test]
    fn test_search_item_fallbacks() {
        let item = SearchResultItem::default();
        assert_eq!(item.display_name(), "Unknown");
        assert_eq!(item.subtitle(), "— · —");
        assert_eq!(item.image(), None);

        let item = SearchResultItem {
            id_code: Some("OP05-119".to_string()),
            language: Some("EN".to_string()),
            ..Default::default()
        };
        assert_eq!(item.subtitle(), "OP05-119 · EN");
        assert_eq!(item.alt_text(), "OP05-119");
    }

    #[test]
    fn test_search_item_decodes_partial_json() {
        let items: Vec<SearchResultItem> =
            serde_json::from_str(r#"[{"id_code":"OP05-119","name":"Example Card","image_url":"http://x/img.png"}]"#)
                .unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name(), "Example Card");
        assert_eq!(items[0].image(), Some("http://x/img.png"));
        assert_eq!(items[0].language, None);
    }

    #[test]
    fn test_search_item_accepts_non_string_fields() {
        let items: Vec<SearchResultItem> = serde_json::from_str(
            r#"[{"id_code":119,"name":"Example Card","language":{"code":"EN"}},{"name":"Second"}]"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].subtitle(), "119 · —");
        assert_eq!(items[1].display_name(), "Second");
    }

    #[test]
    fn test_entry_decodes_float_and_string_numbers() {
        let entries: Vec<CollectionEntry> = serde_json::from_str(
            r#"[
                {"_id":"a","quantity":2,"purchase_price":10.0},
                {"_id":"b","quantity":1.0,"purchase_price":"5"},
                {"_id":"c","quantity":"lots","purchase_price":[1]}
            ]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].cost(), 20.0);
        assert_eq!(entries[1].cost(), 5.0);
        assert_eq!(entries[2].quantity, None);
        assert_eq!(entries[2].cost(), 0.0);
    }

    #[test]
    fn test_entry_cost_defaults() {
        let mut entry = CollectionEntry {
            id: "a".to_string(),
            ..Default::default()
        };
        assert_eq!(entry.cost(), 0.0);

        entry.purchase_price = Some(2.5);
        assert_eq!(entry.cost(), 2.5);

        entry.quantity = Some(4.0);
        assert_eq!(entry.cost(), 10.0);

        entry.quantity = Some(0.0);
        assert_eq!(entry.cost(), 2.5);
    }

    #[test]
    fn test_entry_prefers_custom_image() {
        let mut entry = CollectionEntry {
            id: "a".to_string(),
            image_url: Some("http://x/market.png".to_string()),
            ..Default::default()
        };
        assert_eq!(entry.display_image(), Some("http://x/market.png"));

        entry.custom_image_url = Some("/uploads/mine.png".to_string());
        assert_eq!(entry.display_image(), Some("/uploads/mine.png"));
    }

    #[test]
    fn test_entry_decodes_null_price() {
        let entry: CollectionEntry =
            serde_json::from_str(r#"{"_id":"x1","purchase_price":null,"quantity":2}"#).unwrap();
        assert_eq!(entry.id, "x1");
        assert_eq!(entry.purchase_price, None);
        assert_eq!(entry.cost(), 0.0);
    }

    #[test]
    fn test_new_entry_omits_missing_fields_and_nulls_nan() {
        let item = SearchResultItem {
            id_code: Some("OP05-119".to_string()),
            ..Default::default()
        };
        let body = NewCollectionEntry::from_item(&item, f64::NAN, Currency::Usd, 1);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["id_code"], "OP05-119");
        assert!(json.get("name").is_none());
        assert_eq!(json["source"], "cardmarket");
        assert!(json["purchase_price"].is_null());
        assert_eq!(json["purchase_currency"], "USD");
    }

    #[test]
    fn test_tab_placeholders() {
        assert!(DashboardTab::Collection.placeholder().is_none());
        assert!(DashboardTab::Market.placeholder().unwrap().contains("N/A"));
        assert!(DashboardTab::Trending
            .placeholder()
            .unwrap()
            .contains("No fabricated prices"));
    }
}

//! Collection dashboard state.
//!
//! Holds the last collection snapshot and the last conversion rate. The two
//! are fetched independently and may be out of date relative to each other.
//! Both fetches degrade silently: an unreachable backend shows an empty
//! collection, an unavailable rate shows USD amounts unconverted.

use crate::api::CollectorApi;
use crate::error::CollectorResult;
use crate::types::{CollectionEntry, ConversionRate, Currency, DashboardTab};

/// Whether a currency change needs a rate request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateFetch {
    NotNeeded,
    Needed { from: Currency, to: Currency },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub entries: Vec<CollectionEntry>,
    pub currency: Currency,
    pub rate: f64,
    pub tab: DashboardTab,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            currency: Currency::Usd,
            rate: 1.0,
            tab: DashboardTab::Collection,
        }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot; any failure leaves an empty collection.
    pub fn apply_collection(&mut self, result: CollectorResult<Vec<CollectionEntry>>) {
        self.entries = match result {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Showing empty collection: {}", e);
                Vec::new()
            }
        };
    }

    /// Switch display currency. USD resets the rate to 1 locally; EUR always
    /// asks for a fresh rate.
    pub fn select_currency(&mut self, currency: Currency) -> RateFetch {
        self.currency = currency;
        match currency {
            Currency::Usd => {
                self.rate = 1.0;
                RateFetch::NotNeeded
            }
            Currency::Eur => RateFetch::Needed {
                from: Currency::Usd,
                to: Currency::Eur,
            },
        }
    }

    /// Store a fetched rate. Missing, zero, non-finite or failed all mean 1.
    pub fn apply_rate(&mut self, result: CollectorResult<ConversionRate>) {
        self.rate = match result {
            Ok(ConversionRate { rate: Some(rate) }) if rate.is_finite() && rate != 0.0 => rate,
            Ok(_) => 1.0,
            Err(e) => {
                tracing::warn!("Using rate 1: {}", e);
                1.0
            }
        };
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    /// Sum of price times quantity, in purchase units
    pub fn total_spent(&self) -> f64 {
        self.entries
            .iter()
            .fold(0.0, |total, entry| total + entry.cost())
    }

    /// Total converted to the selected display currency
    pub fn display_total(&self) -> f64 {
        let multiplier = match self.currency {
            Currency::Usd => 1.0,
            Currency::Eur => self.rate,
        };
        self.total_spent() * multiplier
    }

    /// e.g. `$0.00`, `€23.00`
    pub fn formatted_total(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.display_total())
    }

    /// Set the custom image of the entry with `entry_id`; others untouched.
    pub fn patch_custom_image(&mut self, entry_id: &str, url: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                entry.custom_image_url = Some(url.to_string());
                true
            }
            None => false,
        }
    }

    /// Fetch and apply the collection snapshot.
    pub async fn load<A: CollectorApi>(&mut self, api: &A) {
        let result = api.list_collection().await;
        self.apply_collection(result);
    }

    /// Select a currency and fetch the rate if it needs one.
    pub async fn change_currency<A: CollectorApi>(&mut self, api: &A, currency: Currency) {
        if let RateFetch::Needed { from, to } = self.select_currency(currency) {
            let result = api.conversion_rate(from, to).await;
            self.apply_rate(result);
        }
    }
}

//! OPTCG Collector Core Library
//!
//! Backend client and UI-independent state for a trading-card collection
//! tracker.
//!
//! ## Overview
//!
//! Users search a marketplace mirror, add found cards to a personal
//! collection with purchase price, currency and quantity, view the total
//! spent in USD or EUR, and attach a custom image to a collection entry.
//! Search indexing, persistence, currency rates and image storage all live
//! in an external backend reached over HTTP.
//!
//! The state types in this crate ([`SearchState`], [`AddForm`],
//! [`Dashboard`], [`ImageUpload`]) are split into `begin`/`finish` halves so
//! a UI can hold them in reactive signals and await the request in between,
//! and each also offers a `run` that does the whole cycle against any
//! [`CollectorApi`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use collector_core::{BackendConfig, Dashboard, HttpApi, SearchState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let api = HttpApi::new(BackendConfig::from_env(None));
//!
//!     let mut search = SearchState::new();
//!     search.set_query("OP05-119");
//!     for item in search.run(&api).await.unwrap_or_default() {
//!         println!("{} ({})", item.display_name(), item.subtitle());
//!     }
//!
//!     let mut dashboard = Dashboard::new();
//!     dashboard.load(&api).await;
//!     println!("Total spent: {}", dashboard.formatted_total());
//! }
//! ```

pub mod add;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod search;
pub mod types;
pub mod upload;

#[cfg(test)]
mod test_support;

// Re-exports
pub use add::AddForm;
pub use api::{CollectorApi, HttpApi};
pub use config::{BackendConfig, BackendSource};
pub use dashboard::{Dashboard, RateFetch};
pub use error::{CollectorError, CollectorResult};
pub use search::SearchState;
pub use types::*;
pub use upload::{ImageUpload, LocalImage};

//! UI Components for OPTCG Collector.
//!
//! Each component keeps its state in a `collector_core` state type held in
//! a signal and spawns one request per user action.

mod add_to_collection;
mod collection_list;
mod currency_toggle;
mod image_upload;
mod results_grid;
mod search_bar;

pub use add_to_collection::AddToCollectionButton;
pub use collection_list::CollectionList;
pub use currency_toggle::CurrencyToggle;
pub use image_upload::UploadCustomImage;
pub use results_grid::ResultsGrid;
pub use search_bar::SearchBar;

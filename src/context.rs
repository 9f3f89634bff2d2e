//! Backend client context for OPTCG Collector.
//!
//! Provides one shared [`HttpApi`] to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| HttpApi::new(get_backend_config()));
//!
//! // In child components
//! let api = use_api();
//! ```

use collector_core::{BackendConfig, HttpApi};
use dioxus::prelude::*;

/// Get the backend resolved at startup.
pub fn get_backend_config() -> BackendConfig {
    crate::get_backend_config()
}

/// Hook to access the backend client from context.
///
/// `HttpApi` is cheap to clone; clone it into each spawned request.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>()
}

/// Show a blocking error dialog.
///
/// Used for failures of user-triggered saves and uploads; search errors are
/// shown inline instead and background fetches are never surfaced.
pub async fn alert(message: String) {
    rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("OPTCG Collector")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

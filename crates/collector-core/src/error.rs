//! Error types for OPTCG Collector
//!
//! User-triggered operations (search, save, upload) collapse every failure
//! into one generic variant whose `Display` is the exact text shown to the
//! user. Background fetches have their own variants but are always swallowed
//! into safe defaults by the dashboard.

use thiserror::Error;

/// Main error type for collector operations
#[derive(Error, Debug)]
pub enum CollectorError {
    /// Marketplace search failed (transport, non-2xx or malformed body)
    #[error("Search failed")]
    SearchFailed,

    /// Creating a collection entry failed
    #[error("Save failed")]
    SaveFailed,

    /// Custom image upload failed
    #[error("Upload failed")]
    UploadFailed,

    /// Collection snapshot could not be fetched or decoded
    #[error("Collection unavailable")]
    CollectionUnavailable,

    /// Conversion rate could not be fetched or decoded
    #[error("Rate unavailable")]
    RateUnavailable,

    /// Selected file is not a supported image type
    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),

    /// Currency code outside USD/EUR
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Local file I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CollectorError
pub type CollectorResult<T> = Result<T, CollectorError>;

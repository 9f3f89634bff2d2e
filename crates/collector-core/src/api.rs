//! Backend API seam.
//!
//! [`CollectorApi`] is the boundary between the state machines and the
//! network. [`HttpApi`] talks to the real backend with `reqwest`; tests plug
//! in in-memory fakes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::config::BackendConfig;
use crate::error::{CollectorError, CollectorResult};
use crate::types::{
    CollectionEntry, ConversionRate, CreatedEntry, Currency, NewCollectionEntry, SearchResultItem,
    UploadedImage,
};
use crate::upload::LocalImage;

/// Multipart field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "file";

/// Everything except alphanumerics and `-_.!~*'()` is escaped, so a space
/// goes out as `%20` rather than `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Operations the client performs against the backend.
///
/// Every call is fire-once: no retry, no timeout, no cancellation.
#[allow(async_fn_in_trait)]
pub trait CollectorApi {
    /// `GET /api/search/cardmarket?q=`
    async fn search(&self, query: &str) -> CollectorResult<Vec<SearchResultItem>>;

    /// `GET /api/collection`
    async fn list_collection(&self) -> CollectorResult<Vec<CollectionEntry>>;

    /// `POST /api/collection`
    async fn add_to_collection(&self, entry: &NewCollectionEntry) -> CollectorResult<CreatedEntry>;

    /// `GET /api/rate?from=&to=`
    async fn conversion_rate(&self, from: Currency, to: Currency) -> CollectorResult<ConversionRate>;

    /// `PUT /api/collection/{entry_id}/image`
    async fn upload_custom_image(
        &self,
        entry_id: &str,
        image: &LocalImage,
    ) -> CollectorResult<UploadedImage>;
}

/// HTTP implementation of [`CollectorApi`].
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpApi {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }
}

/// Send, require a 2xx status, decode the JSON body.
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, reqwest::Error> {
    request.send().await?.error_for_status()?.json().await
}

impl CollectorApi for HttpApi {
    async fn search(&self, query: &str) -> CollectorResult<Vec<SearchResultItem>> {
        let url = format!(
            "{}?q={}",
            self.config.endpoint("/api/search/cardmarket"),
            utf8_percent_encode(query, QUERY_COMPONENT)
        );
        tracing::debug!(%url, "searching marketplace");

        fetch_json(self.client.get(url))
            .await
            .map_err(|e| {
                tracing::warn!("Search request failed: {}", e);
                CollectorError::SearchFailed
            })
    }

    async fn list_collection(&self) -> CollectorResult<Vec<CollectionEntry>> {
        let url = self.config.endpoint("/api/collection");
        tracing::debug!(%url, "loading collection");

        fetch_json(self.client.get(url)).await.map_err(|e| {
            tracing::warn!("Collection request failed: {}", e);
            CollectorError::CollectionUnavailable
        })
    }

    async fn add_to_collection(&self, entry: &NewCollectionEntry) -> CollectorResult<CreatedEntry> {
        let url = self.config.endpoint("/api/collection");
        tracing::debug!(%url, id_code = ?entry.id_code, "adding to collection");

        fetch_json(self.client.post(url).json(entry))
            .await
            .map_err(|e| {
                tracing::warn!("Save request failed: {}", e);
                CollectorError::SaveFailed
            })
    }

    async fn conversion_rate(&self, from: Currency, to: Currency) -> CollectorResult<ConversionRate> {
        let url = self.config.endpoint("/api/rate");
        tracing::debug!(%url, %from, %to, "fetching conversion rate");

        fetch_json(
            self.client
                .get(url)
                .query(&[("from", from.code()), ("to", to.code())]),
        )
        .await
        .map_err(|e| {
            tracing::warn!("Rate request failed: {}", e);
            CollectorError::RateUnavailable
        })
    }

    async fn upload_custom_image(
        &self,
        entry_id: &str,
        image: &LocalImage,
    ) -> CollectorResult<UploadedImage> {
        let url = self
            .config
            .endpoint(&format!("/api/collection/{}/image", entry_id));
        tracing::debug!(%url, file = %image.file_name, size = image.bytes.len(), "uploading custom image");

        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image.mime)
            .map_err(|e| {
                tracing::warn!("Invalid image MIME type {}: {}", image.mime, e);
                CollectorError::UploadFailed
            })?;
        let form = Form::new().part(IMAGE_FIELD, part);

        fetch_json(self.client.put(url).multipart(form))
            .await
            .map_err(|e| {
                tracing::warn!("Upload request failed: {}", e);
                CollectorError::UploadFailed
            })
    }
}

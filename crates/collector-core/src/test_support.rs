//! In-memory [`CollectorApi`] for unit tests.

use std::cell::RefCell;

use crate::api::CollectorApi;
use crate::error::{CollectorError, CollectorResult};
use crate::types::{
    CollectionEntry, ConversionRate, CreatedEntry, Currency, NewCollectionEntry, SearchResultItem,
    UploadedImage,
};
use crate::upload::LocalImage;

/// Requests seen by a [`FakeApi`]
#[derive(Debug, Clone, Default)]
pub struct Calls {
    pub search: Vec<String>,
    pub list: usize,
    pub added: Vec<NewCollectionEntry>,
    pub rate: usize,
    pub uploads: Vec<(String, String)>,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    fail: bool,
    search_results: Vec<SearchResultItem>,
    collection: Vec<CollectionEntry>,
    rate: Option<f64>,
    created_id: String,
    custom_image_url: String,
    calls: RefCell<Calls>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            created_id: "new-entry".to_string(),
            custom_image_url: "/uploads/custom.png".to_string(),
            ..Default::default()
        }
    }

    /// Every request fails with the operation's error
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn with_search_results(mut self, items: Vec<SearchResultItem>) -> Self {
        self.search_results = items;
        self
    }

    pub fn with_collection(mut self, entries: Vec<CollectionEntry>) -> Self {
        self.collection = entries;
        self
    }

    pub fn with_rate(mut self, rate: Option<f64>) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_created_id(mut self, id: &str) -> Self {
        self.created_id = id.to_string();
        self
    }

    pub fn with_custom_image_url(mut self, url: &str) -> Self {
        self.custom_image_url = url.to_string();
        self
    }

    pub fn calls(&self) -> Calls {
        self.calls.borrow().clone()
    }

    fn respond<T>(&self, ok: T, err: CollectorError) -> CollectorResult<T> {
        if self.fail {
            Err(err)
        } else {
            Ok(ok)
        }
    }
}

impl CollectorApi for FakeApi {
    async fn search(&self, query: &str) -> CollectorResult<Vec<SearchResultItem>> {
        self.calls.borrow_mut().search.push(query.to_string());
        self.respond(self.search_results.clone(), CollectorError::SearchFailed)
    }

    async fn list_collection(&self) -> CollectorResult<Vec<CollectionEntry>> {
        self.calls.borrow_mut().list += 1;
        self.respond(self.collection.clone(), CollectorError::CollectionUnavailable)
    }

    async fn add_to_collection(&self, entry: &NewCollectionEntry) -> CollectorResult<CreatedEntry> {
        self.calls.borrow_mut().added.push(entry.clone());
        self.respond(
            CreatedEntry {
                id: self.created_id.clone(),
            },
            CollectorError::SaveFailed,
        )
    }

    async fn conversion_rate(&self, _from: Currency, _to: Currency) -> CollectorResult<ConversionRate> {
        self.calls.borrow_mut().rate += 1;
        self.respond(ConversionRate { rate: self.rate }, CollectorError::RateUnavailable)
    }

    async fn upload_custom_image(
        &self,
        entry_id: &str,
        image: &LocalImage,
    ) -> CollectorResult<UploadedImage> {
        self.calls
            .borrow_mut()
            .uploads
            .push((entry_id.to_string(), image.file_name.clone()));
        self.respond(
            UploadedImage {
                custom_image_url: self.custom_image_url.clone(),
            },
            CollectorError::UploadFailed,
        )
    }
}

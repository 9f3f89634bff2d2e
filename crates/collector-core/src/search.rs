//! Search bar state.
//!
//! One request per explicit search action. No debounce, no cancellation of
//! an in-flight search; whichever response lands last wins.

use crate::api::CollectorApi;
use crate::error::CollectorResult;
use crate::types::SearchResultItem;

/// Query text, loading flag and last error of the search bar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search. Returns the query to send, or `None` when the query is
    /// blank and no request must be issued.
    pub fn begin(&mut self) -> Option<String> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.query.clone())
    }

    /// Complete a search started with [`begin`](Self::begin).
    pub fn finish(
        &mut self,
        result: CollectorResult<Vec<SearchResultItem>>,
    ) -> Option<Vec<SearchResultItem>> {
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "search results received");
                Some(items)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Run a full search cycle against `api`.
    pub async fn run<A: CollectorApi>(&mut self, api: &A) -> Option<Vec<SearchResultItem>> {
        let query = self.begin()?;
        let result = api.search(&query).await;
        self.finish(result)
    }
}

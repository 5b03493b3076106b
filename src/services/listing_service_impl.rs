use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    domain::{
        errors::StorageResult,
        models::{ListingQuery, ListingResult},
    },
    ports::{services::ListingService, storage::ObjectPageStore},
};

/// Per-call cap on the page-size hint, matching the provider's per-request
/// limit.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Implementation of ListingService: drives the paginated storage port
/// until the caller's limit is reached or the backend runs out of pages.
#[derive(Clone)]
pub struct ListingServiceImpl {
    store: Arc<dyn ObjectPageStore>,
}

impl ListingServiceImpl {
    /// Create a new ListingServiceImpl instance
    pub fn new(store: Arc<dyn ObjectPageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ListingService for ListingServiceImpl {
    async fn list_bucket(&self, query: ListingQuery) -> StorageResult<ListingResult> {
        let limit = query.max_keys;

        // A page can legally hold as few as one entry, so `limit` pages is
        // the most a conforming backend ever needs. Past that the
        // collaborator is paginating in circles and the loop must not
        // follow it.
        let page_budget = limit;

        let mut entries = Vec::new();
        let mut token: Option<String> = None;

        for page_no in 0..page_budget {
            let page_size = (limit - entries.len()).min(MAX_PAGE_SIZE);
            let page = self
                .store
                .list_page(&query.prefix, page_size, token.as_deref())
                .await?;

            debug!(
                page = page_no,
                received = page.entries.len(),
                "fetched listing page"
            );

            entries.extend(page.entries);
            token = page.next_token;

            if entries.len() >= limit {
                // Discard any overshoot from the last page.
                let overshot = entries.len() > limit;
                entries.truncate(limit);
                return Ok(ListingResult {
                    entries,
                    truncated: overshot || token.is_some(),
                });
            }

            if token.is_none() {
                return Ok(ListingResult {
                    entries,
                    truncated: false,
                });
            }
        }

        warn!(
            pages = page_budget,
            prefix = %query.prefix,
            "pagination bound reached with a live continuation token"
        );
        Ok(ListingResult {
            entries,
            truncated: true,
        })
    }
}

use crate::domain::{
    errors::StorageResult,
    models::{ListingQuery, ListingResult},
};
use async_trait::async_trait;

/// Port for the bucket listing use case
#[async_trait]
pub trait ListingService: Send + Sync + 'static {
    /// List bucket contents for a validated query.
    ///
    /// Aggregates backend pages until the query's `max_keys` is reached or
    /// the backend runs out of pages; a single backend failure aborts the
    /// whole operation with no partial results.
    async fn list_bucket(&self, query: ListingQuery) -> StorageResult<ListingResult>;
}

use crate::domain::{errors::StorageResult, models::ObjectEntry};
use async_trait::async_trait;

/// One page of a paginated listing
#[derive(Debug, Clone)]
pub struct ObjectPage {
    /// Entries in backend return order
    pub entries: Vec<ObjectEntry>,
    /// Opaque cursor for the next page; `None` signals the final page
    pub next_token: Option<String>,
}

/// Port for the storage backend's paginated list operation.
/// This abstracts the actual storage backend (S3, in-memory, etc.) behind
/// one narrow capability so the listing engine never sees provider types.
#[async_trait]
pub trait ObjectPageStore: Send + Sync + 'static {
    /// Fetch one page of objects under `prefix`, resuming from `token`.
    ///
    /// `page_size` is a hint; a backend may return fewer entries per page,
    /// and a page smaller than the hint does not imply the listing is done.
    /// Only an absent `next_token` does.
    async fn list_page(
        &self,
        prefix: &str,
        page_size: usize,
        token: Option<&str>,
    ) -> StorageResult<ObjectPage>;
}

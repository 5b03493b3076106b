use async_trait::async_trait;
use futures::StreamExt;
use object_store::{ObjectStore as ApacheObjectStore, path::Path as ObjectPath};
use std::sync::Arc;
use tracing::error;

use crate::{
    domain::{
        errors::{StorageError, StorageResult},
        models::ObjectEntry,
    },
    ports::storage::{ObjectPage, ObjectPageStore},
};

/// Adapter that implements our ObjectPageStore trait using Apache
/// object_store.
///
/// The continuation token is the key of the last entry in the previous
/// page; `list_with_offset` resumes lexicographically after it, which keeps
/// the adapter stateless between calls.
pub struct ApachePageStoreAdapter {
    inner: Arc<dyn ApacheObjectStore>,
}

impl ApachePageStoreAdapter {
    pub fn new(store: Arc<dyn ApacheObjectStore>) -> Self {
        Self { inner: store }
    }
}

#[async_trait]
impl ObjectPageStore for ApachePageStoreAdapter {
    async fn list_page(
        &self,
        prefix: &str,
        page_size: usize,
        token: Option<&str>,
    ) -> StorageResult<ObjectPage> {
        let prefix_path = (!prefix.is_empty()).then(|| ObjectPath::from(prefix));

        let mut stream = match token {
            Some(offset) => self
                .inner
                .list_with_offset(prefix_path.as_ref(), &ObjectPath::from(offset)),
            None => self.inner.list(prefix_path.as_ref()),
        };

        let mut entries = Vec::new();
        while entries.len() < page_size {
            match stream.next().await {
                Some(Ok(meta)) => entries.push(ObjectEntry {
                    key: meta.location.to_string(),
                    size: meta.size,
                    last_modified: meta.last_modified,
                }),
                Some(Err(e)) => return Err(map_backend_error(e)),
                // Stream exhausted: this was the final page.
                None => {
                    return Ok(ObjectPage {
                        entries,
                        next_token: None,
                    });
                }
            }
        }

        let next_token = entries.last().map(|entry| entry.key.clone());
        Ok(ObjectPage {
            entries,
            next_token,
        })
    }
}

/// Exhaustive mapping from provider failure categories to engine failure
/// kinds. Unrecognized failures fail closed as `Unavailable`; the raw
/// provider error is logged here and never reaches the caller.
fn map_backend_error(error: object_store::Error) -> StorageError {
    error!(%error, "storage backend call failed");

    match error {
        object_store::Error::NotFound { .. } => StorageError::NotFound {
            message: "the specified bucket or key space does not exist".to_string(),
        },
        object_store::Error::PermissionDenied { .. }
        | object_store::Error::Unauthenticated { .. } => StorageError::AccessDenied {
            message: "insufficient permissions to list the bucket".to_string(),
        },
        _ => StorageError::Unavailable {
            message: "the storage backend could not service the request".to_string(),
        },
    }
}

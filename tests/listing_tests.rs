use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum_test::TestServer;
use axum::http::StatusCode;
use bucket_listing_server::{
    ApachePageStoreAdapter, ListingServiceImpl, ObjectEntry, ObjectPage, ObjectPageStore,
    StorageError, StorageResult,
    adapters::inbound::http::router::{AppState, create_router},
};
use chrono::{TimeZone, Utc};
use object_store::{ObjectStore, PutPayload, memory::InMemory, path::Path};
use serde_json::Value;

async fn server_with_keys(keys: &[&str]) -> TestServer {
    let store = Arc::new(InMemory::new());
    for key in keys {
        store
            .put(&Path::from(*key), PutPayload::from(vec![0u8; 3]))
            .await
            .unwrap();
    }
    server_with_page_store(Arc::new(ApachePageStoreAdapter::new(store)))
}

fn server_with_page_store(page_store: Arc<dyn ObjectPageStore>) -> TestServer {
    let state = AppState {
        listing_service: Arc::new(ListingServiceImpl::new(page_store)),
    };
    TestServer::new(create_router(state)).unwrap()
}

/// Always fails with the configured error, counting calls
struct FailingStore {
    error: StorageError,
    calls: AtomicUsize,
}

impl FailingStore {
    fn new(error: StorageError) -> Arc<Self> {
        Arc::new(Self {
            error,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl ObjectPageStore for FailingStore {
    async fn list_page(
        &self,
        _prefix: &str,
        _page_size: usize,
        _token: Option<&str>,
    ) -> StorageResult<ObjectPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error.clone())
    }
}

/// Serves a fixed script of pages regardless of the page-size hint
struct ScriptedStore {
    pages: Vec<ObjectPage>,
    calls: AtomicUsize,
}

#[async_trait]
impl ObjectPageStore for ScriptedStore {
    async fn list_page(
        &self,
        _prefix: &str,
        _page_size: usize,
        _token: Option<&str>,
    ) -> StorageResult<ObjectPage> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.pages[call].clone())
    }
}

fn entry(key: &str) -> ObjectEntry {
    ObjectEntry {
        key: key.to_string(),
        size: 123,
        last_modified: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_lists_bucket_contents() {
    let server = server_with_keys(&["a.txt"]).await;

    let response = server.get("/list-bucket").await;

    response.assert_status_ok();
    assert!(
        response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("application/json")
    );
    assert_eq!(response.header("access-control-allow-origin"), "*");

    let body: Value = response.json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["truncated"], false);
    assert_eq!(body["prefix"], "");
    assert_eq!(body["keys"][0]["key"], "a.txt");
    assert_eq!(body["keys"][0]["size"], 3);
}

#[tokio::test]
async fn test_timestamps_are_rfc3339() {
    let store = Arc::new(ScriptedStore {
        pages: vec![ObjectPage {
            entries: vec![entry("a.txt")],
            next_token: None,
        }],
        calls: AtomicUsize::new(0),
    });
    let server = server_with_page_store(store);

    let body: Value = server.get("/list-bucket").await.json();

    assert_eq!(body["keys"][0]["last_modified"], "2024-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_prefix_scopes_results_and_is_echoed() {
    let server = server_with_keys(&["docs/a.txt", "docs/b.txt", "images/c.png"]).await;

    let response = server
        .get("/list-bucket")
        .add_query_param("prefix", "docs/")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 2);
    assert_eq!(body["prefix"], "docs/");
    for key in body["keys"].as_array().unwrap() {
        assert!(key["key"].as_str().unwrap().starts_with("docs/"));
    }
}

#[tokio::test]
async fn test_empty_bucket_lists_cleanly() {
    let server = server_with_keys(&[]).await;

    let body: Value = server.get("/list-bucket").await.json();

    assert_eq!(body["count"], 0);
    assert_eq!(body["truncated"], false);
    assert_eq!(body["keys"], Value::Array(vec![]));
}

#[tokio::test]
async fn test_bad_max_keys_rejected_before_any_storage_call() {
    for bad in ["0", "-3", "abc"] {
        let store = FailingStore::new(StorageError::Unavailable {
            message: "should never be called".to_string(),
        });
        let server = server_with_page_store(store.clone());

        let response = server
            .get("/list-bucket")
            .add_query_param("max_keys", bad)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "ValidationError");
        assert!(body["message"].as_str().unwrap().contains("max_keys"));
        assert!(body["message"].as_str().unwrap().contains(bad));
        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_access_denied_maps_to_forbidden_and_stops() {
    let store = FailingStore::new(StorageError::AccessDenied {
        message: "insufficient permissions to list the bucket".to_string(),
    });
    let server = server_with_page_store(store.clone());

    let response = server.get("/list-bucket").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: Value = response.json();
    assert_eq!(body["error"], "AccessDenied");
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_bucket_maps_to_not_found() {
    let store = FailingStore::new(StorageError::NotFound {
        message: "the specified bucket or key space does not exist".to_string(),
    });
    let server = server_with_page_store(store);

    let response = server.get("/list-bucket").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "NotFound");
}

#[tokio::test]
async fn test_backend_failure_maps_to_bad_gateway() {
    let store = FailingStore::new(StorageError::Unavailable {
        message: "the storage backend could not service the request".to_string(),
    });
    let server = server_with_page_store(store);

    let response = server.get("/list-bucket").await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"], "BackendUnavailable");
}

#[tokio::test]
async fn test_internal_failure_is_masked() {
    let store = FailingStore::new(StorageError::Internal {
        message: "page store returned inconsistent state".to_string(),
    });
    let server = server_with_page_store(store);

    let response = server.get("/list-bucket").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["error"], "InternalError");
    assert_eq!(body["message"], "unexpected failure");
}

#[tokio::test]
async fn test_error_responses_carry_cors_headers() {
    let store = FailingStore::new(StorageError::AccessDenied {
        message: "insufficient permissions to list the bucket".to_string(),
    });
    let server = server_with_page_store(store);

    let response = server.get("/list-bucket").await;

    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_pagination_honors_the_requested_limit() {
    // 3 backend pages of 2 entries each with max_keys = 5
    let store = Arc::new(ScriptedStore {
        pages: vec![
            ObjectPage {
                entries: vec![entry("a"), entry("b")],
                next_token: Some("t1".to_string()),
            },
            ObjectPage {
                entries: vec![entry("c"), entry("d")],
                next_token: Some("t2".to_string()),
            },
            ObjectPage {
                entries: vec![entry("e"), entry("f")],
                next_token: Some("t3".to_string()),
            },
        ],
        calls: AtomicUsize::new(0),
    });
    let server = server_with_page_store(store.clone());

    let response = server
        .get("/list-bucket")
        .add_query_param("max_keys", "5")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 5);
    assert_eq!(body["truncated"], true);
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_limit_cuts_a_real_listing() {
    let server = server_with_keys(&["a", "b", "c", "d", "e", "f"]).await;

    let response = server
        .get("/list-bucket")
        .add_query_param("max_keys", "4")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["count"], 4);
    assert_eq!(body["truncated"], true);
}

#[tokio::test]
async fn test_identical_queries_are_idempotent() {
    let server = server_with_keys(&["a.txt", "b.txt", "docs/c.txt"]).await;

    let first: Value = server.get("/list-bucket").await.json();
    let second: Value = server.get("/list-bucket").await.json();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_health_endpoint_reports_healthy() {
    let server = server_with_keys(&[]).await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "healthy");
}

use object_store::{aws::AmazonS3Builder, memory::InMemory};
use std::sync::Arc;

use crate::{
    adapters::outbound::storage::ApachePageStoreAdapter, domain::value_objects::BucketName,
    ports::storage::ObjectPageStore, services::ListingServiceImpl,
};

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage_backend: StorageBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    S3 {
        bucket: String,
        region: String,
        endpoint: Option<String>,
        access_key: Option<String>,
        secret_key: Option<String>,
    },
}

/// Application services container
pub struct AppServices {
    pub listing_service: ListingServiceImpl,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let page_store = self.create_page_store()?;

        Ok(AppServices {
            listing_service: ListingServiceImpl::new(page_store),
        })
    }

    /// Create the storage adapter based on configuration
    fn create_page_store(&self) -> Result<Arc<dyn ObjectPageStore>, AppError> {
        match &self.config.storage_backend {
            StorageBackend::InMemory => {
                let store = Arc::new(InMemory::new());
                Ok(Arc::new(ApachePageStoreAdapter::new(store)))
            }
            StorageBackend::S3 {
                bucket,
                region,
                endpoint,
                access_key,
                secret_key,
            } => {
                let bucket =
                    BucketName::new(bucket.clone()).map_err(|e| AppError::Configuration {
                        message: format!("invalid bucket name: {}", e),
                    })?;

                let mut builder = AmazonS3Builder::new()
                    .with_bucket_name(bucket.as_str())
                    .with_region(region.clone());

                if let Some(endpoint) = endpoint {
                    builder = builder.with_endpoint(endpoint.clone()).with_allow_http(true);
                }

                if let (Some(access_key), Some(secret_key)) = (access_key, secret_key) {
                    builder = builder
                        .with_access_key_id(access_key.clone())
                        .with_secret_access_key(secret_key.clone());
                }

                let store = builder.build().map_err(|e| AppError::StorageInit {
                    message: e.to_string(),
                })?;

                Ok(Arc::new(ApachePageStoreAdapter::new(Arc::new(store))))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Storage initialization error: {message}")]
    StorageInit { message: String },
}

/// Convenience functions for common configurations
///
/// Create an in-memory application for testing and development
pub fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}

/// Create an S3-backed application
pub fn create_s3_app(
    bucket: String,
    region: String,
    endpoint: Option<String>,
    access_key: Option<String>,
    secret_key: Option<String>,
) -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_storage_backend(StorageBackend::S3 {
            bucket,
            region,
            endpoint,
            access_key,
            secret_key,
        })
        .build()
}

/// Create application from environment variables
pub fn create_app_from_env() -> Result<AppServices, AppError> {
    let storage_backend = match std::env::var("STORAGE_BACKEND").as_deref() {
        Ok("s3") => {
            let bucket = std::env::var("BUCKET_NAME").map_err(|_| AppError::Configuration {
                message: "BUCKET_NAME environment variable required".to_string(),
            })?;
            let region =
                std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());

            StorageBackend::S3 {
                bucket,
                region,
                endpoint: std::env::var("S3_ENDPOINT").ok(),
                access_key: std::env::var("S3_ACCESS_KEY").ok(),
                secret_key: std::env::var("S3_SECRET_KEY").ok(),
            }
        }
        _ => StorageBackend::InMemory,
    };

    AppBuilder::new()
        .with_storage_backend(storage_backend)
        .build()
}

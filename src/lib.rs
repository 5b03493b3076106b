pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core entities and value objects
pub use domain::{
    // Value objects
    BucketName,
    DEFAULT_MAX_KEYS,
    // Models
    ListingQuery,
    ListingResult,
    ObjectEntry,
    // Errors
    StorageError,
    StorageResult,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{ListingService, ObjectPage, ObjectPageStore};

// Service implementations - business logic
pub use services::{ListingServiceImpl, MAX_PAGE_SIZE};

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppError, AppServices, StorageBackend, create_app_from_env,
    create_in_memory_app, create_s3_app,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::storage::ApachePageStoreAdapter;

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        ApachePageStoreAdapter, AppBuilder, AppServices, BucketName, ListingQuery,
        ListingService, ListingServiceImpl, ObjectPageStore, create_in_memory_app,
        create_s3_app,
    };
}

pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use services::ListingService;
pub use storage::{ObjectPage, ObjectPageStore};

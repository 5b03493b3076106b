mod listing_service_impl;

pub use listing_service_impl::{ListingServiceImpl, MAX_PAGE_SIZE};

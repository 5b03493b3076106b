pub mod listing_handlers;

pub use listing_handlers::*;

mod apache_page_store_adapter;

pub use apache_page_store_adapter::ApachePageStoreAdapter;

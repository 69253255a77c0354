pub mod blob_store;
pub mod listings_api;
pub mod secret_provider;

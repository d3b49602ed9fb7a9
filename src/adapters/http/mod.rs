//! HTTP adapters for remote storefront services.

pub mod category_client;

pub use category_client::HttpCategoryClient;

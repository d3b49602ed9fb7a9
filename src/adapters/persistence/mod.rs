//! Product catalog sources.

pub mod catalog_json;
pub mod in_memory;

pub use catalog_json::JsonCatalogRepo;
pub use in_memory::InMemoryCatalog;

//! In-memory product catalog for tests and demos.

use crate::domain::{DomainError, Product, ProductCatalog};
use crate::ports::ProductCatalogPort;

/// Serves a fixed catalog without touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: ProductCatalog,
}

impl InMemoryCatalog {
    pub fn new(catalog: ProductCatalog) -> Self {
        Self { catalog }
    }
}

impl FromIterator<Product> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait::async_trait]
impl ProductCatalogPort for InMemoryCatalog {
    async fn load_catalog(&self) -> Result<ProductCatalog, DomainError> {
        Ok(self.catalog.clone())
    }
}

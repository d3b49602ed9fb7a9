//! Implements ProductCatalogPort using a JSON file.
//!
//! The file is either an object keyed by product id or an array of products.
//! Object key order is the catalog order.

use crate::domain::{DomainError, ProductCatalog};
use crate::ports::ProductCatalogPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// JSON file-based product catalog. Read on every `load_catalog` call.
pub struct JsonCatalogRepo {
    path: PathBuf,
}

impl JsonCatalogRepo {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ProductCatalogPort for JsonCatalogRepo {
    async fn load_catalog(&self) -> Result<ProductCatalog, DomainError> {
        let raw = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Catalog(format!("read {}: {}", self.path.display(), e))
        })?;
        let catalog: ProductCatalog = serde_json::from_str(&raw).map_err(|e| {
            DomainError::Catalog(format!("parse {}: {}", self.path.display(), e))
        })?;
        info!(
            path = %self.path.display(),
            products = catalog.len(),
            "loaded product catalog"
        );
        Ok(catalog)
    }
}

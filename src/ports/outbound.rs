//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ApiResponse, Category, CategoryNode, DomainError, ProductCatalog};

/// `active` value used when the caller has no preference.
pub const DEFAULT_ACTIVE_ONLY: bool = true;

/// Remote category service. Each call is one GET; the envelope is returned as decoded.
///
/// Transport failures, non-2xx statuses and undecodable bodies surface as `DomainError`.
/// Nothing is retried or cached.
#[async_trait::async_trait]
pub trait CategoryPort: Send + Sync {
    /// List categories filtered by the `active` flag.
    async fn get_categories(&self, active: bool)
    -> Result<ApiResponse<Vec<Category>>, DomainError>;

    /// Fetch the hierarchical category structure.
    async fn get_category_tree(&self) -> Result<ApiResponse<Vec<CategoryNode>>, DomainError>;

    async fn get_category_by_id(
        &self,
        category_id: &str,
    ) -> Result<ApiResponse<Category>, DomainError>;

    async fn get_category_by_slug(&self, slug: &str) -> Result<ApiResponse<Category>, DomainError>;
}

/// Source of the storefront product collection.
#[async_trait::async_trait]
pub trait ProductCatalogPort: Send + Sync {
    async fn load_catalog(&self) -> Result<ProductCatalog, DomainError>;
}

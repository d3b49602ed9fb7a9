//! Storefront home page: builds the curated sections from the product catalog.
//!
//! - Loads the catalog through ProductCatalogPort
//! - Runs the curation selectors
//! - Drops sections with nothing to show

use crate::domain::{
    DomainError, Product, ProductCatalog, Section, SectionKind, select_new_arrivals,
    select_todays_offers,
};
use crate::ports::ProductCatalogPort;
use std::sync::Arc;
use tracing::debug;

/// Storefront service. Catalog in, renderable sections out.
pub struct StorefrontService {
    catalog: Arc<dyn ProductCatalogPort>,
}

impl StorefrontService {
    pub fn new(catalog: Arc<dyn ProductCatalogPort>) -> Self {
        Self { catalog }
    }

    /// "New Arrivals" section, or `None` when no product qualifies.
    pub async fn new_arrivals(&self) -> Result<Option<Section>, DomainError> {
        let catalog = self.catalog.load_catalog().await?;
        Ok(build_section(SectionKind::NewArrivals, &catalog))
    }

    /// "Today's Offers" section, or `None` when no product qualifies.
    pub async fn todays_offers(&self) -> Result<Option<Section>, DomainError> {
        let catalog = self.catalog.load_catalog().await?;
        Ok(build_section(SectionKind::TodaysOffers, &catalog))
    }

    /// Home page sections in display order. Loads the catalog once.
    pub async fn home_sections(&self) -> Result<Vec<Section>, DomainError> {
        let catalog = self.catalog.load_catalog().await?;
        Ok([SectionKind::NewArrivals, SectionKind::TodaysOffers]
            .into_iter()
            .filter_map(|kind| build_section(kind, &catalog))
            .collect())
    }
}

fn build_section(kind: SectionKind, catalog: &ProductCatalog) -> Option<Section> {
    let picked = match kind {
        SectionKind::NewArrivals => select_new_arrivals(catalog),
        SectionKind::TodaysOffers => select_todays_offers(catalog),
    };
    match picked {
        Some(products) => {
            debug!(section = %kind, count = products.len(), "built section");
            Some(Section {
                kind,
                products: products.into_iter().cloned().collect::<Vec<Product>>(),
            })
        }
        None => {
            debug!(section = %kind, "no qualifying products, section omitted");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemoryCatalog;

    fn service(products: Vec<Product>) -> StorefrontService {
        let catalog: InMemoryCatalog = products.into_iter().collect();
        StorefrontService::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_home_sections_in_display_order() {
        let svc = service(vec![
            Product {
                rating: Some(4.9),
                ..Product::new("fresh")
            },
            Product {
                discount_percent: Some(55.0),
                ..Product::new("deal")
            },
        ]);
        let sections = svc.home_sections().await.unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title(), "New Arrivals");
        assert_eq!(sections[0].products[0].id, "fresh");
        assert_eq!(sections[1].title(), "Today's Offers");
        assert_eq!(sections[1].products[0].id, "deal");
        assert_eq!(sections[1].view_all_href(), "/categories");
    }

    #[tokio::test]
    async fn test_empty_section_is_omitted() {
        let svc = service(vec![Product {
            is_best_seller: true,
            reviews: Some(900),
            ..Product::new("classic")
        }]);
        assert!(svc.new_arrivals().await.unwrap().is_none());
        let offers = svc.todays_offers().await.unwrap().unwrap();
        assert_eq!(offers.products.len(), 1);

        let sections = svc.home_sections().await.unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, SectionKind::TodaysOffers);
    }

    #[tokio::test]
    async fn test_empty_catalog_has_no_sections() {
        let svc = service(Vec::new());
        assert!(svc.home_sections().await.unwrap().is_empty());
    }
}

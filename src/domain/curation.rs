//! Curation selectors for the storefront home sections.
//!
//! Pure functions over a `ProductCatalog`. `None` means "omit the section",
//! never "render an empty section".

use crate::domain::entities::{Product, ProductCatalog};

/// Max products shown in one curated section.
pub const SECTION_LIMIT: usize = 10;

/// Rating a product must exceed to count as a new arrival.
pub const NEW_ARRIVAL_MIN_RATING: f64 = 4.0;

/// Review count a product must stay below to count as a new arrival.
pub const NEW_ARRIVAL_MAX_REVIEWS: u32 = 100;

/// Discount percentage a product must exceed to count as an offer.
pub const OFFER_MIN_DISCOUNT: f64 = 40.0;

/// New-arrival heuristic: a good rating or few reviews.
///
/// The catalog has no creation date, so "new" is approximated from rating and
/// review count. Missing fields fail their clause.
pub fn is_new_arrival(product: &Product) -> bool {
    product.rating.is_some_and(|r| r > NEW_ARRIVAL_MIN_RATING)
        || product.reviews.is_some_and(|n| n < NEW_ARRIVAL_MAX_REVIEWS)
}

/// Offer rule: a deep discount, or a best seller.
pub fn is_todays_offer(product: &Product) -> bool {
    product.discount_percent.is_some_and(|d| d > OFFER_MIN_DISCOUNT) || product.is_best_seller
}

/// First `SECTION_LIMIT` new arrivals in catalog order. No sorting.
pub fn select_new_arrivals(catalog: &ProductCatalog) -> Option<Vec<&Product>> {
    let picked: Vec<&Product> = catalog
        .iter()
        .filter(|p| is_new_arrival(p))
        .take(SECTION_LIMIT)
        .collect();
    non_empty(picked)
}

/// Offers ordered by discount, highest first (absent discount counts as 0),
/// truncated to `SECTION_LIMIT`. Equal discounts keep catalog order.
pub fn select_todays_offers(catalog: &ProductCatalog) -> Option<Vec<&Product>> {
    let mut picked: Vec<&Product> = catalog.iter().filter(|p| is_todays_offer(p)).collect();
    // stable: ties stay in catalog order
    picked.sort_by(|a, b| b.discount_or_zero().total_cmp(&a.discount_or_zero()));
    picked.truncate(SECTION_LIMIT);
    non_empty(picked)
}

fn non_empty(products: Vec<&Product>) -> Option<Vec<&Product>> {
    if products.is_empty() {
        None
    } else {
        Some(products)
    }
}

//! Domain entities. Pure data structures for the storefront.
//!
//! Products and categories are owned by external sources; nothing here mutates them.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Opaque product identifier.
pub type ProductId = String;

/// A catalog product. Only `rating`, `reviews`, `discount_percent` and `is_best_seller`
/// drive curation; the rest is display data.
///
/// Numeric and flag fields decode leniently: a value of the wrong shape becomes "absent"
/// instead of failing the whole catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "deserialize_product_id")]
    pub id: ProductId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub reviews: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_percent: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_best_seller: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Discount used for ordering offers. Absent counts as 0.
    pub fn discount_or_zero(&self) -> f64 {
        self.discount_percent.unwrap_or(0.0)
    }
}

/// Catalog data uses both numeric and string ids. Anything else (including `null`)
/// decodes as empty so a map key can fill it in.
fn deserialize_product_id<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => ProductId::new(),
    })
}

/// Finite number, or a numeric string. Otherwise absent.
fn deserialize_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|v| v.is_finite()))
}

/// Non-negative whole count. `12.0` is 12; negative, fractional or non-numeric is absent.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = deserialize_number(deserializer)?
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32);
    Ok(count)
}

/// `true` only for JSON `true`; `null` or any other value is `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// Insertion-ordered mapping from product id to product.
///
/// Iteration order is the order products were first inserted; curation depends on it.
/// Re-inserting an existing id replaces the product in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) {
        match self.index.get(&product.id) {
            Some(&pos) => self.products[pos] = product,
            None => {
                self.index.insert(product.id.clone(), self.products.len());
                self.products.push(product);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for product in iter {
            catalog.insert(product);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a ProductCatalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accepts `{ "<id>": Product, ... }` (key order kept, empty `id` filled from the key)
/// or `[Product, ...]`.
impl<'de> Deserialize<'de> for ProductCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ProductCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of product id to product, or a list of products")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut catalog = ProductCatalog::new();
                while let Some((key, mut product)) = map.next_entry::<String, Product>()? {
                    if product.id.is_empty() {
                        product.id = key;
                    }
                    catalog.insert(product);
                }
                Ok(catalog)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut catalog = ProductCatalog::new();
                while let Some(product) = seq.next_element::<Product>()? {
                    if product.id.is_empty() {
                        return Err(de::Error::missing_field("id"));
                    }
                    catalog.insert(product);
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_any(CatalogVisitor)
    }
}

/// Remote category. Structure is owned by the category service; fields other than
/// the common ones are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Category {
    /// `_id`, falling back to a plain `id` field.
    pub fn identifier(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or_else(|| self.extra.get("id").and_then(|v| v.as_str()))
    }

    pub fn is_active(&self) -> Option<bool> {
        self.extra.get("isActive").and_then(|v| v.as_bool())
    }

    /// Parent category id; `None` for roots or when the service omits it.
    pub fn parent_id(&self) -> Option<&str> {
        self.extra.get("parentId").and_then(|v| v.as_str())
    }
}

/// A category with its subcategories, as returned by the tree endpoint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryNode {
    #[serde(flatten)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<CategoryNode>>,
}

impl CategoryNode {
    pub fn children(&self) -> &[CategoryNode] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// Uniform response envelope of the category service. Decoded as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    // no `default`: it would add a `T: Default` bound to Deserialize
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Curated storefront section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    NewArrivals,
    TodaysOffers,
}

impl SectionKind {
    pub fn title(self) -> &'static str {
        match self {
            SectionKind::NewArrivals => "New Arrivals",
            SectionKind::TodaysOffers => "Today's Offers",
        }
    }

    /// Target of the section's "View All" link.
    pub fn view_all_href(self) -> &'static str {
        "/categories"
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A renderable section. Never empty: an empty selection is omitted instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub products: Vec<Product>,
}

impl Section {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn view_all_href(&self) -> &'static str {
        self.kind.view_all_href()
    }
}

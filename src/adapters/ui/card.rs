//! Plain-text product cards and section blocks.

use crate::domain::{Product, Section};

fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Render one product card. Lines: name (+ badge), price, rating.
///
/// Lines with nothing to show are left out.
pub fn render_product_card(product: &Product) -> String {
    let mut lines = Vec::with_capacity(3);

    let name = product.name.as_deref().unwrap_or(&product.id);
    if product.is_best_seller {
        lines.push(format!("{name}  [Best Seller]"));
    } else {
        lines.push(name.to_string());
    }

    let mut price_line = Vec::new();
    if let Some(price) = product.price {
        price_line.push(format_price(price));
    }
    if let Some(original) = product
        .original_price
        .filter(|o| product.price.is_none_or(|p| *o > p))
    {
        price_line.push(format!("was {}", format_price(original)));
    }
    if let Some(discount) = product.discount_percent.filter(|d| *d > 0.0) {
        price_line.push(format!("-{discount:.0}%"));
    }
    if !price_line.is_empty() {
        lines.push(price_line.join("  "));
    }

    match (product.rating, product.reviews) {
        (Some(rating), Some(reviews)) => lines.push(format!("★ {rating:.1} ({reviews} reviews)")),
        (Some(rating), None) => lines.push(format!("★ {rating:.1}")),
        (None, Some(reviews)) => lines.push(format!("({reviews} reviews)")),
        (None, None) => {}
    }

    lines.join("\n")
}

/// Render a section: header with its "View All" link, then numbered cards.
pub fn render_section(section: &Section) -> String {
    let mut out = format!(
        "== {} ==  View All → {}\n",
        section.title(),
        section.view_all_href()
    );
    for (i, product) in section.products.iter().enumerate() {
        out.push('\n');
        for (j, line) in render_product_card(product).lines().enumerate() {
            if j == 0 {
                out.push_str(&format!("{:>2}. {}\n", i + 1, line));
            } else {
                out.push_str(&format!("    {line}\n"));
            }
        }
    }
    out
}

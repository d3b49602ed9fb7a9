//! Startup banner: figlet wordmark, tagline, version.

use crossterm::style::{Color, Stylize};
use figlet_rs::FIGfont;

const WORDMARK: &str = "STOREFRONT";
const TAGLINE: &str = "Fresh picks, every day";

/// Brand green (#16a34a).
const BRAND_GREEN: Color = Color::Rgb {
    r: 0x16,
    g: 0xa3,
    b: 0x4a,
};

/// Wordmark in the standard figlet font; plain text if the font fails to load.
fn wordmark() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(WORDMARK).map(|fig| fig.to_string()))
        .unwrap_or_else(|| WORDMARK.to_string())
}

/// Unstyled banner text.
fn banner_text() -> String {
    format!(
        "{}\n{}  v{}",
        wordmark().trim_end(),
        TAGLINE,
        env!("CARGO_PKG_VERSION")
    )
}

pub fn print_welcome() {
    println!("{}", banner_text().with(BRAND_GREEN).bold());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_ends_with_tagline_and_version() {
        let text = banner_text();
        let last = text.lines().last().unwrap();
        assert_eq!(
            last,
            format!("{TAGLINE}  v{}", env!("CARGO_PKG_VERSION"))
        );
        assert!(text.lines().count() > 1);
    }
}

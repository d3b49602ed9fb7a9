//! Application configuration. API base URL, catalog location.

use serde::Deserialize;

/// Category API base used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3003/api/v1";

/// Product catalog file used when nothing is configured.
pub const DEFAULT_CATALOG_PATH: &str = "./data/products.json";

/// Base URL variable shared with the web front end.
pub const PUBLIC_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Category API base URL. Read from STOREFRONT_API_URL, then NEXT_PUBLIC_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Path to the product catalog JSON. Read from STOREFRONT_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("STOREFRONT"));
        if let Ok(path) = std::env::var("STOREFRONT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // NEXT_PUBLIC_API_URL is read directly so one .env serves both front ends
        if cfg.api_url.is_none() {
            cfg.api_url = std::env::var(PUBLIC_API_URL_ENV)
                .ok()
                .filter(|s| !s.is_empty());
        }
        Ok(cfg)
    }

    /// Returns the category API base URL. Defaults to the local API server.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns the catalog path. Defaults to ./data/products.json.
    pub fn catalog_path_or_default(&self) -> String {
        self.catalog_path
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), "http://localhost:3003/api/v1");
        assert_eq!(cfg.catalog_path_or_default(), "./data/products.json");
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let cfg = AppConfig {
            api_url: Some(String::new()),
            catalog_path: Some(String::new()),
        };
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.catalog_path_or_default(), DEFAULT_CATALOG_PATH);
    }

    #[test]
    fn test_configured_values_win() {
        let cfg = AppConfig {
            api_url: Some("https://api.shop.test/v2".to_string()),
            catalog_path: Some("/srv/catalog.json".to_string()),
        };
        assert_eq!(cfg.api_url_or_default(), "https://api.shop.test/v2");
        assert_eq!(cfg.catalog_path_or_default(), "/srv/catalog.json");
    }
}

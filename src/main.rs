//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use storefront::adapters::http::HttpCategoryClient;
use storefront::adapters::persistence::JsonCatalogRepo;
use storefront::adapters::ui::tui::TuiInputPort;
use storefront::ports::{CategoryPort, InputPort, ProductCatalogPort};
use storefront::shared::config::AppConfig;
use storefront::usecases::StorefrontService;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    storefront::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config could not be loaded, using defaults");
        AppConfig::default()
    });

    // --- Category API ---
    let client =
        HttpCategoryClient::new(&cfg.api_url_or_default()).map_err(|e| anyhow::anyhow!("{}", e))?;
    info!(url = %client.base_url(), "category API");
    let categories: Arc<dyn CategoryPort> = Arc::new(client);

    // --- Product catalog ---
    let catalog_repo = JsonCatalogRepo::new(cfg.catalog_path_or_default());
    if !catalog_repo.path().exists() {
        warn!(
            path = %catalog_repo.path().display(),
            "catalog file not found; set STOREFRONT_CATALOG_PATH"
        );
    }
    let catalog: Arc<dyn ProductCatalogPort> = Arc::new(catalog_repo);

    // --- Services ---
    let storefront = Arc::new(StorefrontService::new(catalog));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(storefront, categories));

    // --- Run (main menu -> sections / categories) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

// Entrypoint: the composition root.
// - Reads configuration from the environment exactly once.
// - Builds the client and prints the first page of favorites.

use anyhow::Context;
use favorites_client::{ApiConfig, EntryClient};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Log level comes from RUST_LOG, `info` when unset.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The only place the environment is read. See `ApiConfig::from_env`.
    let config = ApiConfig::from_env().context("Failed to read API configuration")?;
    tracing::info!("using entries api at {}", config.base_url());
    let api = EntryClient::new(config).context("Failed to build HTTP client")?;

    println!("Favorite Movies & TV Shows");
    // Page 1, 20 per page. Non-JSON bodies are printed as-is.
    let res = api.list_first_page().context("Failed to fetch entries")?;
    match res.json() {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(_) => println!("{}", res.body),
    }
    Ok(())
}

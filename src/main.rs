use anyhow::Context;
use clap::Parser;
use stay_scout::config::Args;
use stay_scout::server::{router, AppState};
use stay_scout::store::{JsonFileStore, ListingStore};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 Stay Scout - listing search");

    let store = JsonFileStore::new(&args.listings);
    let catalog = store.all_listings().await;
    if catalog.is_empty() {
        warn!(
            "No listings loaded from {} - searches will return nothing",
            store.path().display()
        );
    } else {
        info!(
            "Loaded {} listings from {} ({})",
            catalog.len(),
            store.path().display(),
            store.source_name()
        );
    }

    let app = router(AppState::new(store));

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await.context("HTTP server failed")?;

    Ok(())
}

//! Royalty API Server
//!
//! Main entry point for the royalty ledger service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use royalty_api::{AppState, create_router};
use royalty_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "royalty=debug,tower_http=debug".into());
    if config.log.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load seed data
    let store = royalty_db::connect();
    let counts = store.counts().await;
    info!(
        authors = counts.authors,
        books = counts.books,
        sales = counts.sales,
        "Ledger seeded"
    );

    // Create router
    let app = create_router(AppState::new(store));

    // Start server
    let addr = config.server.addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

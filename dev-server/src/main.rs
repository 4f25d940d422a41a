//! Development server for gallery UI work
//!
//! Serves the sample catalog and a cookie session from the in-process mock
//! backend, on the port the UI expects by default.
//!
//! Usage: cargo run -p dev-server
//!
//! Environment (or a .env file):
//! - PORT: port to listen on, defaults to 5000
//! - MEMBERS_ONLY: set to serve the catalog only to signed-in viewers

use anyhow::Result;
use test_helpers::telemetry::{get_subscriber, init_subscriber};
use tracing::info;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if available
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info".into()))?;

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT,
    };

    let catalog = test_helpers::mock::sample_catalog();
    let exhibitions = catalog.len();
    let app = test_helpers::spawn_app_on_port(port, catalog).await?;
    if std::env::var_os("MEMBERS_ONLY").is_some() {
        app.require_session(true);
        info!("Catalog restricted to signed-in viewers");
    }

    info!("Mock backend running on {}", app.address());
    info!("   {exhibitions} exhibitions in the catalog");
    info!("   Sign in: curl -c jar -H 'content-type: application/json' \\");
    info!(
        "      -d '{{\"username\":\"ines\"}}' {}/api/login",
        app.address()
    );
    info!("   UI: cd ui && BACKEND_URL={} trunk serve", app.address());
    info!("Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("Shutting down development server");
    Ok(())
}

//! Warden API entry point

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use warden_api::config::Config;
use warden_api::{app, seed_demo_identities};
use warden_core::{AuthService, MemoryIdentityStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Warden API");

    // Configuration is startup-fatal: a missing or weak signing key must
    // prevent the process from serving at all
    let config = Config::from_env()?;

    let store = Arc::new(MemoryIdentityStore::new());
    seed_demo_identities(&store)?;

    let auth = Arc::new(AuthService::new(&config.auth, store)?);
    let app = app(auth);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::sync::Arc;

use move_arbiter::MoveArbitrator;
use server::config;
use server::routes;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();

    // The key is read once here; without it every move is a random legal one
    let arbiter = Arc::new(MoveArbitrator::from_config(&config.arbiter)?);

    let app = routes::router(arbiter);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! Entry point: load configuration and serve the dashboard API.

use std::sync::Arc;

use cricket_dashboard::{
    config::Config,
    server::{router, AppState},
    statsguru::http::StatsClient,
    Result,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let client = StatsClient::new(&config.stats_base_url, &config.search_base_url)?;
    let state = Arc::new(AppState { client });
    let app = router(state, &config.frontend_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "cricket dashboard API listening");
    axum::serve(listener, app).await?;

    Ok(())
}

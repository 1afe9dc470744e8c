#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ServerConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::Bind)?;

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "portfolio listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

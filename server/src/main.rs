//! Wellspring host: SSR for the storefront and admin panel, plus the
//! `/api/*` proxy to the marketplace backend.

mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal outside development.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(api_base_url = %config.api_base_url, assets_dir = %config.assets_dir.display(), "config loaded");

    let state = state::AppState::new(config)?;
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "wellspring listening");
    axum::serve(listener, app).await?;
    Ok(())
}

//! data-service binary: generate the dataset, then serve it over HTTP.

use anyhow::Context;
use data_service::{build_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "data_service=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::from_config(&config);
    tracing::info!(
        items = state.dataset.len(),
        save_path = %config.save_path.display(),
        "dataset generated"
    );

    let app = build_router(state);
    let addr = config.socket_addr();

    tracing::info!("data-service v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

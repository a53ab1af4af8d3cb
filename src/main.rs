//! 服务入口

use deeplx::config::Config;
use deeplx::server::{serve, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deeplx=info")),
        )
        .init();

    let cfg = Config::from_env();

    tracing::info!(
        "DeepL X has been successfully launched! Listening on {}:{}",
        cfg.ip,
        cfg.port
    );
    if !cfg.token.is_empty() {
        tracing::info!("Access token is set.");
    }
    if !cfg.proxy.is_empty() {
        tracing::info!("Proxy is set to {}", cfg.proxy);
    }

    let state = AppState::new(cfg)?;
    serve(state).await
}

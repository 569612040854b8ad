//! Rental quote HTTP server

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use rental_quote::config::Config;
use rental_quote::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rental_quote=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.bind_addr();
    info!("Quoting in {}", config.currency);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app(AppState::new(config))).await?;
    Ok(())
}

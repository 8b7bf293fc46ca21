//! OpenSASE Fulfillment - ship-from-store source selection service

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opensase_fulfillment::http::{create_router, AppState};
use opensase_fulfillment::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let config = AppConfig::from_env()?;
    let port = config.port;
    tracing::info!(
        transit_km_per_day = config.scoring.transit_speed_km_per_day,
        max_alternatives = config.scoring.max_alternatives,
        allow_split = config.split.allow_split,
        "scoring configuration loaded"
    );
    let app = create_router(AppState::load(config)?);

    tracing::info!("🚀 OpenSASE Fulfillment listening on 0.0.0.0:{}", port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?, app).await?;
    Ok(())
}

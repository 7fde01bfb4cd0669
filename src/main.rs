use anyhow::Context;
use axum::http::HeaderValue;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seeconf::{create_router, db, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let pool = db::connect(&config)
        .await
        .context("Failed to connect to the database")?;
    db::migrate(&pool)
        .await
        .context("Failed to run database migrations")?;

    let client_origin = HeaderValue::from_str(&config.client_url)
        .with_context(|| format!("CLIENT_URL is not a valid origin: {}", config.client_url))?;

    let app = create_router(AppState::new(pool, config.conference_start), client_origin);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;

    info!("See Conf API server listening on http://{}", config.bind_addr());
    info!("Conference opens at {}", config.conference_start.to_rfc3339());
    axum::serve(listener, app).await?;

    Ok(())
}

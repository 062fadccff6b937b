use tracing::info;
use tracing_subscriber::EnvFilter;

use marquee_api::api::{create_router, AppState};
use marquee_api::config::Config;
use marquee_api::data::{load_catalog, load_ratings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Both tables are read once here and stay immutable for the process
    // lifetime
    let catalog = load_catalog(&config.movies_path)?;
    let ratings = load_ratings(&config.ratings_path)?;
    let state = AppState::new(catalog, ratings);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

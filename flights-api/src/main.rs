use std::net::SocketAddr;
use anyhow::Context;
use flights_api::{app, state::{build_repository, AppState}};
use flights_core::seed;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flights_api=debug,flights_core=debug,flights_store=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = flights_store::app_config::Config::load().context("Failed to load config")?;
    tracing::info!("Starting Flights API on port {}", config.server.port);

    let repo = build_repository(&config.database).await?;

    if config.seed.enabled {
        let base = seed::base_time(chrono::Local::now().naive_local());
        let flights = seed::seed_flights(base, &mut rand::thread_rng());
        seed::load(repo.as_ref(), flights)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to seed flights: {}", e))?;
    }

    let app = app(AppState::new(repo), &config.server.api_base);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}{}", addr, config.server.api_base);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

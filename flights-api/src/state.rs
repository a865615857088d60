use std::sync::Arc;
use anyhow::Context;
use flights_core::{FlightQueryService, FlightRepository};
use flights_store::app_config::DatabaseConfig;
use flights_store::{DbClient, InMemoryFlightRepository, PostgresFlightRepository};

#[derive(Clone)]
pub struct AppState {
    pub flights: FlightQueryService,
}

impl AppState {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self {
            flights: FlightQueryService::new(repo),
        }
    }
}

/// Postgres when a database URL is configured, otherwise a fresh in-memory store.
pub async fn build_repository(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn FlightRepository>> {
    match &config.url {
        Some(url) => {
            tracing::info!("Using Postgres flight store");
            let db = DbClient::new(url, config.max_connections)
                .await
                .context("Failed to connect to Postgres")?;
            db.migrate().await.context("Failed to run migrations")?;
            let repo: Arc<dyn FlightRepository> = Arc::new(PostgresFlightRepository::new(db.pool));
            Ok(repo)
        }
        None => {
            tracing::info!("No database configured, using in-memory flight store");
            let repo: Arc<dyn FlightRepository> = Arc::new(InMemoryFlightRepository::new());
            Ok(repo)
        }
    }
}

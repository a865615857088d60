use std::sync::Arc;
use tracing::{debug, info};

use crate::flight::Flight;
use crate::repository::FlightRepository;
use crate::{CoreError, CoreResult};

/// Which store lookup a `from`/`to` pair resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightFilter {
    All,
    ByOrigin(String),
    ByDestination(String),
    ByRoute { origin: String, destination: String },
}

impl FlightFilter {
    /// Absent and empty parameters are treated the same.
    pub fn from_params(from: Option<&str>, to: Option<&str>) -> Self {
        let from = from.filter(|s| !s.is_empty());
        let to = to.filter(|s| !s.is_empty());

        match (from, to) {
            (Some(origin), Some(destination)) => FlightFilter::ByRoute {
                origin: origin.to_string(),
                destination: destination.to_string(),
            },
            (Some(origin), None) => FlightFilter::ByOrigin(origin.to_string()),
            (None, Some(destination)) => FlightFilter::ByDestination(destination.to_string()),
            (None, None) => FlightFilter::All,
        }
    }
}

#[derive(Clone)]
pub struct FlightQueryService {
    repo: Arc<dyn FlightRepository>,
}

impl FlightQueryService {
    pub fn new(repo: Arc<dyn FlightRepository>) -> Self {
        Self { repo }
    }

    pub async fn search(&self, filter: &FlightFilter) -> CoreResult<Vec<Flight>> {
        debug!("Dispatching flight search: {:?}", filter);

        let result = match filter {
            FlightFilter::All => self.repo.find_all().await,
            FlightFilter::ByOrigin(origin) => self.repo.find_by_origin(origin).await,
            FlightFilter::ByDestination(destination) => {
                self.repo.find_by_destination(destination).await
            }
            FlightFilter::ByRoute { origin, destination } => {
                self.repo
                    .find_by_origin_and_destination(origin, destination)
                    .await
            }
        };

        result.map_err(|e| CoreError::Storage(e.to_string()))
    }

    pub async fn get(&self, id: i64) -> CoreResult<Flight> {
        let flight = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| CoreError::Storage(e.to_string()))?;

        flight.ok_or_else(|| {
            info!("Flight lookup missed: {}", id);
            CoreError::NotFound(id)
        })
    }
}

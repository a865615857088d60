pub mod flight;
pub mod repository;
pub mod query;
pub mod seed;

pub use flight::Flight;
pub use query::{FlightFilter, FlightQueryService};
pub use repository::{FlightRepository, RepoResult};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("no such flight (id: {0})")]
    NotFound(i64),
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

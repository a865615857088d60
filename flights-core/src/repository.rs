use async_trait::async_trait;
use crate::flight::Flight;

pub type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Repository trait for flight data access
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Persists `flight`, assigning an id when it has none, and returns the stored record.
    async fn insert(&self, flight: Flight) -> RepoResult<Flight>;

    async fn find_all(&self) -> RepoResult<Vec<Flight>>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Flight>>;

    async fn find_by_origin(&self, origin: &str) -> RepoResult<Vec<Flight>>;

    async fn find_by_destination(&self, destination: &str) -> RepoResult<Vec<Flight>>;

    async fn find_by_origin_and_destination(
        &self,
        origin: &str,
        destination: &str,
    ) -> RepoResult<Vec<Flight>>;
}

use async_trait::async_trait;
use flights_core::repository::{FlightRepository, RepoResult};
use flights_core::Flight;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    flights: BTreeMap<i64, Flight>,
    next_id: i64,
}

/// Process-local store keyed by id; iteration follows id order.
#[derive(Default)]
pub struct InMemoryFlightRepository {
    inner: RwLock<Inner>,
}

impl InMemoryFlightRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filter<F>(&self, predicate: F) -> Vec<Flight>
    where
        F: Fn(&Flight) -> bool,
    {
        let inner = self.inner.read().await;
        inner
            .flights
            .values()
            .filter(|&f| predicate(f))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn insert(&self, mut flight: Flight) -> RepoResult<Flight> {
        let mut inner = self.inner.write().await;

        let id = match flight.id {
            Some(id) => id,
            None => inner
                .next_id
                .max(0)
                .checked_add(1)
                .ok_or("flight id sequence exhausted")?,
        };
        inner.next_id = inner.next_id.max(id);

        flight.id = Some(id);
        inner.flights.insert(id, flight.clone());
        Ok(flight)
    }

    async fn find_all(&self) -> RepoResult<Vec<Flight>> {
        Ok(self.filter(|_| true).await)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Flight>> {
        let inner = self.inner.read().await;
        Ok(inner.flights.get(&id).cloned())
    }

    async fn find_by_origin(&self, origin: &str) -> RepoResult<Vec<Flight>> {
        Ok(self.filter(|f| f.matches_origin(origin)).await)
    }

    async fn find_by_destination(&self, destination: &str) -> RepoResult<Vec<Flight>> {
        Ok(self.filter(|f| f.matches_destination(destination)).await)
    }

    async fn find_by_origin_and_destination(
        &self,
        origin: &str,
        destination: &str,
    ) -> RepoResult<Vec<Flight>> {
        Ok(self
            .filter(|f| f.matches_origin(origin) && f.matches_destination(destination))
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_milli_opt(hour, 0, 0, 0)
            .unwrap()
    }

    async fn seeded() -> InMemoryFlightRepository {
        let repo = InMemoryFlightRepository::new();
        for (origin, destination, day) in [
            ("Paris", "London", 1),
            ("Graz", "Zürich", 2),
            ("Graz", "Hamburg", 3),
            ("Wien", "Barcelona", 4),
            ("Wien", "Paris", 5),
        ] {
            repo.insert(Flight::new(origin, destination, at(day, 8))).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryFlightRepository::new();
        let first = repo.insert(Flight::new("A", "B", at(1, 1))).await.unwrap();
        let second = repo.insert(Flight::new("A", "B", at(1, 1))).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id_round_trips() {
        let repo = InMemoryFlightRepository::new();
        let stored = repo
            .insert(Flight::new("Graz", "Hamburg", at(9, 17)))
            .await
            .unwrap();

        let found = repo.find_by_id(stored.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_insert_with_explicit_id_advances_sequence() {
        let repo = InMemoryFlightRepository::new();
        let explicit = repo
            .insert(Flight::new("A", "B", at(1, 1)).with_id(10))
            .await
            .unwrap();
        let next = repo.insert(Flight::new("C", "D", at(1, 1))).await.unwrap();

        assert_eq!(explicit.id, Some(10));
        assert_eq!(next.id, Some(11));
    }

    #[tokio::test]
    async fn test_exhausted_sequence_is_an_error() {
        let repo = InMemoryFlightRepository::new();
        repo.insert(Flight::new("A", "B", at(1, 1)).with_id(i64::MAX))
            .await
            .unwrap();

        let err = repo
            .insert(Flight::new("C", "D", at(1, 1)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "flight id sequence exhausted");

        // Lock was released and the store is unchanged
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_with_existing_id_replaces_record() {
        let repo = seeded().await;
        repo.insert(Flight::new("Linz", "Rome", at(7, 7)).with_id(1))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().origin, "Linz");
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = seeded().await;
        assert_eq!(repo.find_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = seeded().await;
        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .filter_map(|f| f.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_find_by_origin() {
        let repo = seeded().await;
        let mut destinations: Vec<String> = repo
            .find_by_origin("Graz")
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.destination)
            .collect();
        destinations.sort();
        assert_eq!(destinations, vec!["Hamburg", "Zürich"]);

        assert!(repo.find_by_origin("graz").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_destination() {
        let repo = seeded().await;
        let flights = repo.find_by_destination("Paris").await.unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].origin, "Wien");
    }

    #[tokio::test]
    async fn test_find_by_origin_and_destination() {
        let repo = seeded().await;
        assert_eq!(
            repo.find_by_origin_and_destination("Wien", "Barcelona")
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(repo
            .find_by_origin_and_destination("Wien", "London")
            .await
            .unwrap()
            .is_empty());
    }
}

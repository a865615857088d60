use async_trait::async_trait;
use chrono::NaiveDateTime;
use flights_core::repository::{FlightRepository, RepoResult};
use flights_core::Flight;
use sqlx::PgPool;

pub struct PostgresFlightRepository {
    pool: PgPool,
}

impl PostgresFlightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct FlightRow {
    id: i64,
    origin: String,
    destination: String,
    date: NaiveDateTime,
}

impl From<FlightRow> for Flight {
    fn from(row: FlightRow) -> Self {
        Flight::new(row.origin, row.destination, row.date).with_id(row.id)
    }
}

const SELECT_FLIGHTS: &str = "SELECT id, origin, destination, date FROM flights";

#[async_trait]
impl FlightRepository for PostgresFlightRepository {
    async fn insert(&self, flight: Flight) -> RepoResult<Flight> {
        let row = match flight.id {
            Some(id) => {
                let row = sqlx::query_as::<_, FlightRow>(
                    r#"
                    INSERT INTO flights (id, origin, destination, date)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                        SET origin = EXCLUDED.origin,
                            destination = EXCLUDED.destination,
                            date = EXCLUDED.date
                    RETURNING id, origin, destination, date
                    "#,
                )
                .bind(id)
                .bind(&flight.origin)
                .bind(&flight.destination)
                .bind(flight.date)
                .fetch_one(&self.pool)
                .await?;

                // Keep the sequence ahead of explicitly chosen ids
                sqlx::query(
                    "SELECT setval(pg_get_serial_sequence('flights', 'id'), GREATEST((SELECT MAX(id) FROM flights), 1))",
                )
                .execute(&self.pool)
                .await?;

                row
            }
            None => {
                sqlx::query_as::<_, FlightRow>(
                    r#"
                    INSERT INTO flights (origin, destination, date)
                    VALUES ($1, $2, $3)
                    RETURNING id, origin, destination, date
                    "#,
                )
                .bind(&flight.origin)
                .bind(&flight.destination)
                .bind(flight.date)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row.into())
    }

    async fn find_all(&self) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!("{} ORDER BY id", SELECT_FLIGHTS))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Flight>> {
        let row = sqlx::query_as::<_, FlightRow>(&format!("{} WHERE id = $1", SELECT_FLIGHTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Flight::from))
    }

    async fn find_by_origin(&self, origin: &str) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "{} WHERE origin = $1 ORDER BY id",
            SELECT_FLIGHTS
        ))
        .bind(origin)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_by_destination(&self, destination: &str) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "{} WHERE destination = $1 ORDER BY id",
            SELECT_FLIGHTS
        ))
        .bind(destination)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_by_origin_and_destination(
        &self,
        origin: &str,
        destination: &str,
    ) -> RepoResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(&format!(
            "{} WHERE origin = $1 AND destination = $2 ORDER BY id",
            SELECT_FLIGHTS
        ))
        .bind(origin)
        .bind(destination)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }
}

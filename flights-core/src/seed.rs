//! Demonstration data inserted once while the service boots.

use chrono::{Duration, NaiveDateTime, Timelike};
use rand::Rng;
use tracing::info;

use crate::flight::Flight;
use crate::repository::{FlightRepository, RepoResult};

pub const DAYS_RANGE: i64 = 30;
pub const HOURS_RANGE: i64 = 24;

/// Routes flown at a random offset from the base time.
const RANDOMIZED_ROUTES: [(&str, &str); 4] = [
    ("Graz", "Zürich"),
    ("Graz", "Hamburg"),
    ("Wien", "Barcelona"),
    ("Wien", "Paris"),
];

/// Truncates `now` to the start of its hour.
pub fn base_time(now: NaiveDateTime) -> NaiveDateTime {
    now.date()
        .and_hms_opt(now.hour(), 0, 0)
        .unwrap_or(now)
}

/// Paris→London at `base`, then each randomized route offset by
/// `0..DAYS_RANGE` days and `0..HOURS_RANGE` hours.
pub fn seed_flights<R: Rng>(base: NaiveDateTime, rng: &mut R) -> Vec<Flight> {
    let mut flights = Vec::with_capacity(RANDOMIZED_ROUTES.len() + 1);
    flights.push(Flight::new("Paris", "London", base));

    for (origin, destination) in RANDOMIZED_ROUTES {
        let date = base
            + Duration::days(rng.gen_range(0..DAYS_RANGE))
            + Duration::hours(rng.gen_range(0..HOURS_RANGE));
        flights.push(Flight::new(origin, destination, date));
    }

    flights
}

/// Inserts `flights` into an empty store. A store that already holds
/// flights is left untouched and its contents are returned.
pub async fn load(repo: &dyn FlightRepository, flights: Vec<Flight>) -> RepoResult<Vec<Flight>> {
    let existing = repo.find_all().await?;
    if !existing.is_empty() {
        info!("Store already holds {} flights, skipping seed", existing.len());
        return Ok(existing);
    }

    let mut stored = Vec::with_capacity(flights.len());
    for flight in flights {
        let saved = repo.insert(flight).await?;
        info!(
            "Seeded flight {:?}: {} -> {} at {}",
            saved.id, saved.origin, saved.destination, saved.date
        );
        stored.push(saved);
    }
    Ok(stored)
}

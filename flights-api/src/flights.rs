use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use flights_core::{Flight, FlightFilter};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FlightParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/flight", get(list_flights))
        .route("/flight/{id}", get(get_flight))
}

async fn list_flights(
    State(state): State<AppState>,
    Query(params): Query<FlightParams>,
) -> Result<Json<Vec<Flight>>, AppError> {
    let filter = FlightFilter::from_params(params.from.as_deref(), params.to.as_deref());
    let flights = state.flights.search(&filter).await?;
    Ok(Json(flights))
}

async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Flight>, AppError> {
    let flight = state.flights.get(id).await?;
    Ok(Json(flight))
}

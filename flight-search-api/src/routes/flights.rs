use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use super::ApiError;
use crate::{adapters::inbound::http::FlightResponse, app_state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search_flights))
}

#[derive(Debug, Deserialize)]
pub struct SearchFlightsQuery {
    origin: String,
}

#[instrument(name = "GET /api/flights", skip(app_state))]
async fn search_flights(
    State(app_state): State<AppState>,
    Query(query): Query<SearchFlightsQuery>,
) -> Result<Json<Vec<FlightResponse>>, ApiError> {
    let flights = app_state.flight_search.search_by_origin(&query.origin).await?;

    let response: Vec<FlightResponse> = flights.into_iter().map(FlightResponse::from).collect();

    Ok(Json(response))
}

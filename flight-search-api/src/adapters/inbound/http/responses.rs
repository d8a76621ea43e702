//! HTTP response types for flight endpoints.
//!
//! These types serialize to the JSON format the API exposes.

use serde::Serialize;
use time::{Duration, PrimitiveDateTime};

use crate::domain::models::Flight;

time::serde::format_description!(
    local_date_time,
    PrimitiveDateTime,
    "[year]-[month]-[day]T[hour]:[minute]:[second]"
);

/// One flight in a search result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    /// Local departure time, `YYYY-MM-DDTHH:MM:SS`.
    #[serde(with = "local_date_time")]
    pub departure_date_time: PrimitiveDateTime,
    /// Flight time, e.g. `5h 30m`.
    pub duration: String,
    pub airline: String,
}

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            duration: format_duration(flight.duration),
            flight_number: flight.flight_number,
            origin: flight.origin,
            destination: flight.destination,
            departure_date_time: flight.departure_date_time,
            airline: flight.airline,
        }
    }
}

/// Formats as whole hours plus the zero-padded minute remainder.
pub fn format_duration(duration: Duration) -> String {
    let hours = duration.whole_hours();
    let minutes = duration.whole_minutes() % 60;
    format!("{hours}h {minutes:02}m")
}

//! Mapping between stored flight rows and domain flights.

use time::Duration;

use crate::{
    domain::models::Flight,
    repositories::{DatabaseFlight, NewDatabaseFlight},
};

/// Drops the surrogate id and turns stored minutes back into a duration.
impl From<DatabaseFlight> for Flight {
    fn from(row: DatabaseFlight) -> Self {
        Self {
            flight_number: row.flight_number,
            origin: row.origin,
            destination: row.destination,
            departure_date_time: row.departure_date_time,
            duration: Duration::minutes(row.duration_minutes),
            airline: row.airline,
        }
    }
}

/// Leaves the id to the database. Sub-minute precision is truncated toward zero.
impl From<&Flight> for NewDatabaseFlight {
    fn from(flight: &Flight) -> Self {
        Self {
            flight_number: flight.flight_number.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure_date_time: flight.departure_date_time,
            duration_minutes: flight.duration.whole_minutes(),
            airline: flight.airline.clone(),
        }
    }
}

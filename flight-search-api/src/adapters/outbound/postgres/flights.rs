//! PostgreSQL implementation of the FlightRepository port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{models::Flight, ports::outbound::FlightRepository, FlightSearchError};
use crate::repositories::{FlightRecordRepository, FlightRecordRepositoryImpl};

/// Adapter that implements FlightRepository on top of the `flights` table.
pub struct PostgresFlightAdapter<R = FlightRecordRepositoryImpl> {
    repo: Arc<R>,
}

impl<R> PostgresFlightAdapter<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R: FlightRecordRepository + Send + Sync + 'static> FlightRepository
    for PostgresFlightAdapter<R>
{
    async fn find_by_origin(&self, origin: &str) -> Result<Vec<Flight>, FlightSearchError> {
        let rows = self
            .repo
            .find_by_origin(origin)
            .await
            .map_err(|e| FlightSearchError::storage(e.to_string()))?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }
}

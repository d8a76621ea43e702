//! Composition root: concrete factories for creating service instances.
//!
//! This is the ONLY place that imports concrete outbound adapters.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    adapters::outbound::postgres::PostgresFlightAdapter,
    domain::{ports::inbound::FlightSearchService, services::FlightSearchServiceImpl},
    repositories::{FlightRecordRepository, FlightRecordRepositoryImpl},
};

/// Builds FlightSearchService instances backed by the `flights` table.
pub struct FlightSearchFactory<R = FlightRecordRepositoryImpl> {
    records: Arc<R>,
}

impl FlightSearchFactory {
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(FlightRecordRepositoryImpl::new(pool)))
    }
}

impl<R: FlightRecordRepository + Send + Sync + 'static> FlightSearchFactory<R> {
    pub fn new(records: Arc<R>) -> Self {
        Self { records }
    }

    pub fn create_repository(&self) -> Arc<PostgresFlightAdapter<R>> {
        Arc::new(PostgresFlightAdapter::new(self.records.clone()))
    }

    pub fn create_service(&self) -> Arc<dyn FlightSearchService> {
        Arc::new(FlightSearchServiceImpl::new(self.create_repository()))
    }
}

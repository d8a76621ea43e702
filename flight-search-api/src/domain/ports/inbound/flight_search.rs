use async_trait::async_trait;

use crate::domain::{models::Flight, FlightSearchError};

/// Inbound port for flight search.
///
/// HTTP handlers depend on this trait, never on a concrete service.
#[async_trait]
pub trait FlightSearchService: Send + Sync + 'static {
    /// Find every flight departing from `origin`.
    ///
    /// The origin is not validated; an unknown airport yields an empty list.
    async fn search_by_origin(&self, origin: &str) -> Result<Vec<Flight>, FlightSearchError>;
}

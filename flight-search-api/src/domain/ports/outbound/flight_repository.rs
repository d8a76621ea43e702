//! Flight repository port (outbound).
//!
//! Defines what the search use case needs from flight storage, in domain terms only.

use async_trait::async_trait;

use crate::domain::{models::Flight, FlightSearchError};

/// Outbound port for reading flights.
#[async_trait]
pub trait FlightRepository: Send + Sync + 'static {
    /// Get all flights departing from `origin`, in no particular order.
    ///
    /// No match is an empty list, not an error.
    async fn find_by_origin(&self, origin: &str) -> Result<Vec<Flight>, FlightSearchError>;
}

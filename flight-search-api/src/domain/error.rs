use thiserror::Error;

/// Errors that can occur while searching for flights.
#[derive(Debug, Error)]
pub enum FlightSearchError {
    #[error("flight storage failure: {0}")]
    Storage(String),
}

impl FlightSearchError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

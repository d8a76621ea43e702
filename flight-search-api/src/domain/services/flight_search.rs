use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    models::Flight,
    ports::{inbound::FlightSearchService, outbound::FlightRepository},
    FlightSearchError,
};

/// Implementation of the FlightSearchService inbound port.
///
/// Hands the origin straight to the FlightRepository and returns what it gets back.
pub struct FlightSearchServiceImpl<R: FlightRepository> {
    repository: Arc<R>,
}

impl<R: FlightRepository> FlightSearchServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: FlightRepository> FlightSearchService for FlightSearchServiceImpl<R> {
    async fn search_by_origin(&self, origin: &str) -> Result<Vec<Flight>, FlightSearchError> {
        let flights = self.repository.find_by_origin(origin).await?;
        tracing::debug!(origin, count = flights.len(), "flight search completed");
        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::{macros::datetime, Duration};

    fn jfk_to_lax() -> Flight {
        Flight::new(
            "AA100",
            "JFK",
            "LAX",
            datetime!(2025-10-22 10:30),
            Duration::hours(5) + Duration::minutes(30),
            "American Airlines",
        )
    }

    /// Answers JFK with one flight and everything else with nothing.
    #[derive(Default)]
    struct FakeFlightRepository {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FlightRepository for FakeFlightRepository {
        async fn find_by_origin(&self, origin: &str) -> Result<Vec<Flight>, FlightSearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if origin == "JFK" {
                Ok(vec![jfk_to_lax()])
            } else {
                Ok(Vec::new())
            }
        }
    }

    struct BrokenFlightRepository;

    #[async_trait]
    impl FlightRepository for BrokenFlightRepository {
        async fn find_by_origin(&self, _origin: &str) -> Result<Vec<Flight>, FlightSearchError> {
            Err(FlightSearchError::storage("connection refused"))
        }
    }

    #[tokio::test]
    async fn search_returns_flights_from_origin_airport() {
        let service = FlightSearchServiceImpl::new(Arc::new(FakeFlightRepository::default()));

        let result = service.search_by_origin("JFK").await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].flight_number, "AA100");
        assert_eq!(result[0].origin, "JFK");
        assert_eq!(result[0].destination, "LAX");
        assert_eq!(result[0].airline, "American Airlines");
        assert_eq!(result[0], jfk_to_lax());
    }

    #[tokio::test]
    async fn search_with_no_matches_returns_empty() {
        let service = FlightSearchServiceImpl::new(Arc::new(FakeFlightRepository::default()));

        assert!(service.search_by_origin("ORD").await.unwrap().is_empty());
        assert!(service.search_by_origin("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_queries_repository_once_per_call() {
        let repository = Arc::new(FakeFlightRepository::default());
        let service = FlightSearchServiceImpl::new(repository.clone());

        service.search_by_origin("JFK").await.unwrap();

        assert_eq!(repository.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn search_passes_storage_errors_through() {
        let service = FlightSearchServiceImpl::new(Arc::new(BrokenFlightRepository));

        let err = service.search_by_origin("JFK").await.unwrap_err();

        assert!(matches!(err, FlightSearchError::Storage(_)));
    }
}

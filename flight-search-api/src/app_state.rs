use std::sync::Arc;

use crate::domain::ports::inbound::FlightSearchService;

#[derive(Clone)]
pub struct AppState {
    pub flight_search: Arc<dyn FlightSearchService>,
}

impl AppState {
    pub fn new(flight_search: Arc<dyn FlightSearchService>) -> Self {
        Self { flight_search }
    }
}

mod flight_search;

pub use flight_search::FlightSearchServiceImpl;

mod conversions;
mod flights;

pub use flights::PostgresFlightAdapter;

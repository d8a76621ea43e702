use time::{Duration, PrimitiveDateTime};

/// A scheduled flight.
///
/// Carries no identity of its own; the surrogate key only exists on the stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    /// Local departure time, no offset attached.
    pub departure_date_time: PrimitiveDateTime,
    pub duration: Duration,
    pub airline: String,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date_time: PrimitiveDateTime,
        duration: Duration,
        airline: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            origin: origin.into(),
            destination: destination.into(),
            departure_date_time,
            duration,
            airline: airline.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn flights_with_same_fields_are_equal() {
        let a = Flight::new(
            "AA100",
            "JFK",
            "LAX",
            datetime!(2025-10-22 10:30),
            Duration::minutes(330),
            "American Airlines",
        );
        let b = Flight::new(
            "AA100".to_string(),
            "JFK".to_string(),
            "LAX".to_string(),
            datetime!(2025-10-22 10:30:00),
            Duration::hours(5) + Duration::minutes(30),
            "American Airlines".to_string(),
        );

        assert_eq!(a, b);
    }
}

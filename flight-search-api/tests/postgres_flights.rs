//! Runs against a real database. Needs `DATABASE_URL`; run with `cargo test -- --ignored`.

use std::sync::Arc;

use flight_search_api::{
    adapters::outbound::postgres::PostgresFlightAdapter,
    domain::{models::Flight, ports::outbound::FlightRepository},
    repositories::{FlightRecordRepository, FlightRecordRepositoryImpl, NewDatabaseFlight},
};
use sqlx::PgPool;
use time::{macros::datetime, Duration};

fn aa100() -> Flight {
    Flight::new(
        "AA100",
        "JFK",
        "LAX",
        datetime!(2025-10-22 10:30),
        Duration::minutes(330),
        "American Airlines",
    )
}

fn ua200() -> Flight {
    Flight::new(
        "UA200",
        "LAX",
        "SFO",
        datetime!(2025-10-22 14:00),
        Duration::minutes(90),
        "United Airlines",
    )
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn saved_rows_come_back_by_origin(pool: PgPool) {
    let records = Arc::new(FlightRecordRepositoryImpl::new(pool));
    records.delete_all().await.unwrap();

    let first = records.save(&NewDatabaseFlight::from(&aa100())).await.unwrap();
    let second = records.save(&NewDatabaseFlight::from(&ua200())).await.unwrap();
    assert_ne!(first, second);

    let adapter = PostgresFlightAdapter::new(records.clone());

    assert_eq!(adapter.find_by_origin("JFK").await.unwrap(), vec![aa100()]);
    assert_eq!(adapter.find_by_origin("LAX").await.unwrap(), vec![ua200()]);
    assert!(adapter.find_by_origin("SFO").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn delete_all_empties_the_table(pool: PgPool) {
    let records = FlightRecordRepositoryImpl::new(pool);
    records.save(&NewDatabaseFlight::from(&aa100())).await.unwrap();

    let removed = records.delete_all().await.unwrap();

    assert_eq!(removed, 1);
    assert!(records.find_all().await.unwrap().is_empty());
}

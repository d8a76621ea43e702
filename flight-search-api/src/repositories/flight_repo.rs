use async_trait::async_trait;
use sqlx::PgPool;
use time::PrimitiveDateTime;

use super::repo_error::RepositoryError;

/// Row-level access to the `flights` table.
#[async_trait]
pub trait FlightRecordRepository: Send + Sync {
    async fn find_by_origin(&self, origin: &str) -> Result<Vec<DatabaseFlight>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<DatabaseFlight>, RepositoryError>;
    /// Insert a row and return the id the database assigned to it.
    async fn save(&self, flight: &NewDatabaseFlight) -> Result<i64, RepositoryError>;
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}

pub struct FlightRecordRepositoryImpl {
    pool: PgPool,
}

impl FlightRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DatabaseFlight {
    pub id: i64,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_date_time: PrimitiveDateTime,
    pub duration_minutes: i64,
    pub airline: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDatabaseFlight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_date_time: PrimitiveDateTime,
    pub duration_minutes: i64,
    pub airline: String,
}

#[async_trait]
impl FlightRecordRepository for FlightRecordRepositoryImpl {
    async fn find_by_origin(&self, origin: &str) -> Result<Vec<DatabaseFlight>, RepositoryError> {
        let flights = sqlx::query_as::<_, DatabaseFlight>(
            r#"
            SELECT id, flight_number, origin, destination, departure_date_time, duration_minutes, airline
            FROM flights
            WHERE origin = $1
            "#,
        )
        .bind(origin)
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }

    async fn find_all(&self) -> Result<Vec<DatabaseFlight>, RepositoryError> {
        let flights = sqlx::query_as::<_, DatabaseFlight>(
            r#"
            SELECT id, flight_number, origin, destination, departure_date_time, duration_minutes, airline
            FROM flights
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(flights)
    }

    async fn save(&self, flight: &NewDatabaseFlight) -> Result<i64, RepositoryError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO flights (flight_number, origin, destination, departure_date_time, duration_minutes, airline)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&flight.flight_number)
        .bind(&flight.origin)
        .bind(&flight.destination)
        .bind(flight.departure_date_time)
        .bind(flight.duration_minutes)
        .bind(&flight.airline)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM flights")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

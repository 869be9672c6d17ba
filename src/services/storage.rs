use async_trait::async_trait;
use thiserror::Error;

use crate::{
    db::DbPool,
    models::trip::{NewTrip, Trip},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error("trip {0} not found")]
    NotFound(i64),
    /// The id can never match a row, so the lookup is not sent to the database.
    #[error("invalid trip id {0:?}")]
    InvalidId(String),
}

/// Persistence gateway for trips. Each call is a single statement against the store.
#[async_trait]
pub trait TripStore: Send + Sync {
    /// Inserts the trip and returns the id assigned by the store.
    async fn create(&self, trip: NewTrip) -> Result<i64, StoreError>;

    /// Every stored trip in insertion order.
    async fn find_all(&self) -> Result<Vec<Trip>, StoreError>;

    /// Returns `StoreError::NotFound` when no row has this id.
    async fn find_by_id(&self, id: i64) -> Result<Trip, StoreError>;

    /// Removing an id that does not exist is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct SqliteTripStore {
    db: DbPool,
}

impl SqliteTripStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TripStore for SqliteTripStore {
    async fn create(&self, trip: NewTrip) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO trips (passengername, destination, pickuppoint, phonenumber) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(trip.passengername)
        .bind(trip.destination)
        .bind(trip.pickuppoint)
        .bind(trip.phonenumber)
        .execute(&self.db)
        .await?;
        Ok(result.last_insert_rowid())
    }

    async fn find_all(&self) -> Result<Vec<Trip>, StoreError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT id, passengername, destination, pickuppoint, phonenumber FROM trips ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;
        Ok(trips)
    }

    async fn find_by_id(&self, id: i64) -> Result<Trip, StoreError> {
        sqlx::query_as::<_, Trip>(
            "SELECT id, passengername, destination, pickuppoint, phonenumber FROM trips WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(StoreError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM trips WHERE id = ?1")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

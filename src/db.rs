use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::error::AppError;

pub type DbPool = SqlitePool;

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<DbPool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates the `trips` table if it is not there yet.
pub async fn migrate(db: &DbPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .map_err(|err| AppError::Other(err.into()))
}

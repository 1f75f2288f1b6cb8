//! Idempotent creation and reset of the `habits` table.

use diesel::sql_query;
use diesel_async::RunQueryDsl;
use tracing::info;

use super::pool::{DbPool, PoolError};

const CREATE_HABITS_SQL: &str = "CREATE TABLE IF NOT EXISTS habits (\
    id SERIAL PRIMARY KEY, \
    name TEXT NOT NULL, \
    description TEXT NOT NULL DEFAULT '', \
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()\
)";

const RESET_HABITS_SQL: &str = "TRUNCATE habits RESTART IDENTITY CASCADE";

/// Failures while preparing or resetting the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaBootstrapError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("schema statement failed: {0}")]
    Statement(#[from] diesel::result::Error),
}

/// Create the `habits` table if it does not exist yet.
///
/// # Errors
///
/// Returns [`SchemaBootstrapError`] when no connection is available or the
/// DDL is rejected.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaBootstrapError> {
    let mut conn = pool.get().await?;
    sql_query(CREATE_HABITS_SQL).execute(&mut conn).await?;
    info!("habits table ready");
    Ok(())
}

/// Remove every habit and restart id numbering at 1.
///
/// # Errors
///
/// Returns [`SchemaBootstrapError`] when the truncate fails.
pub async fn reset_habits(pool: &DbPool) -> Result<(), SchemaBootstrapError> {
    let mut conn = pool.get().await?;
    sql_query(RESET_HABITS_SQL).execute(&mut conn).await?;
    Ok(())
}

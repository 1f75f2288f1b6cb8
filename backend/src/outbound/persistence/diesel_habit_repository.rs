//! PostgreSQL-backed `HabitRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{HabitRepository, HabitRepositoryError};
use crate::domain::{Habit, HabitDraft, HabitId, HabitName};

use super::models::{HabitChangeset, HabitRow, NewHabitRow};
use super::pool::{DbPool, PoolError};
use super::schema::habits;

/// Diesel-backed implementation of the habit repository port.
#[derive(Clone)]
pub struct DieselHabitRepository {
    pool: DbPool,
}

impl DieselHabitRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> HabitRepositoryError {
    HabitRepositoryError::connection(error.message())
}

/// Map Diesel errors to repository errors, keeping the driver message.
fn map_diesel_error(error: DieselError) -> HabitRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "habit query lost its connection");
            HabitRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "habit query failed");
            HabitRepositoryError::query(info.message())
        }
        other => {
            debug!(error = %other, "habit query failed");
            HabitRepositoryError::query(other.to_string())
        }
    }
}

/// Convert a row into a domain habit.
///
/// Rows written outside this adapter may violate the domain rules; those
/// surface as query errors rather than panics.
fn row_to_habit(row: HabitRow) -> Result<Habit, HabitRepositoryError> {
    let HabitRow {
        id,
        name,
        description,
        created_at,
    } = row;
    let id = HabitId::new(id).map_err(|err| HabitRepositoryError::query(err.to_string()))?;
    let name = HabitName::new(name)
        .map_err(|err| HabitRepositoryError::query(format!("habit {id}: {err}")))?;
    Ok(Habit::new(
        id,
        HabitDraft::new(name, Some(description)),
        created_at,
    ))
}

#[async_trait]
impl HabitRepository for DieselHabitRepository {
    async fn create(&self, draft: &HabitDraft) -> Result<Habit, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let new_row = NewHabitRow {
            name: draft.name().as_str(),
            description: draft.description(),
        };

        let row = diesel::insert_into(habits::table)
            .values(&new_row)
            .returning(HabitRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_habit(row)
    }

    async fn list_all(&self) -> Result<Vec<Habit>, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<HabitRow> = habits::table
            .select(HabitRow::as_select())
            .order((habits::created_at.desc(), habits::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_habit).collect()
    }

    async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = habits::table
            .find(id.as_i32())
            .select(HabitRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_habit).transpose()
    }

    async fn update(
        &self,
        id: HabitId,
        draft: &HabitDraft,
    ) -> Result<Option<Habit>, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = HabitChangeset {
            name: draft.name().as_str(),
            description: draft.description(),
        };

        let row = diesel::update(habits::table.find(id.as_i32()))
            .set(&changes)
            .returning(HabitRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_habit).transpose()
    }

    async fn delete(&self, id: HabitId) -> Result<bool, HabitRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(habits::table.find(id.as_i32()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

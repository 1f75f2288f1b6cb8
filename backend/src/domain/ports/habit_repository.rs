//! Port for habit persistence.

use async_trait::async_trait;

use crate::domain::{Habit, HabitDraft, HabitId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by habit repository adapters.
    pub enum HabitRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "habit repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "habit repository query failed: {message}",
    }
}

/// Port for storing and reading habits.
///
/// Absence is reported through `Option`/`bool` return values; only storage
/// failures surface as [`HabitRepositoryError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitRepository: Send + Sync {
    /// Insert a habit, assigning its id and creation time.
    async fn create(&self, draft: &HabitDraft) -> Result<Habit, HabitRepositoryError>;

    /// Every habit, newest first.
    async fn list_all(&self) -> Result<Vec<Habit>, HabitRepositoryError>;

    /// Find a habit by id.
    async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, HabitRepositoryError>;

    /// Overwrite name and description; `None` when no such habit exists.
    async fn update(
        &self,
        id: HabitId,
        draft: &HabitDraft,
    ) -> Result<Option<Habit>, HabitRepositoryError>;

    /// Remove a habit; `false` when nothing was deleted.
    async fn delete(&self, id: HabitId) -> Result<bool, HabitRepositoryError>;
}

/// Fixture implementation for tests that never touch stored habits.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHabitRepository;

#[async_trait]
impl HabitRepository for FixtureHabitRepository {
    async fn create(&self, _draft: &HabitDraft) -> Result<Habit, HabitRepositoryError> {
        Err(HabitRepositoryError::query(
            "fixture repository does not store habits",
        ))
    }

    async fn list_all(&self) -> Result<Vec<Habit>, HabitRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: HabitId) -> Result<Option<Habit>, HabitRepositoryError> {
        Ok(None)
    }

    async fn update(
        &self,
        _id: HabitId,
        _draft: &HabitDraft,
    ) -> Result<Option<Habit>, HabitRepositoryError> {
        Ok(None)
    }

    async fn delete(&self, _id: HabitId) -> Result<bool, HabitRepositoryError> {
        Ok(false)
    }
}

//! Habit domain service.
//!
//! [`HabitService`] implements both habit driving ports on top of a
//! [`HabitRepository`]. Absent habits become [`Error::not_found`]; storage
//! failures become [`Error::internal`] carrying the adapter's message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{HabitCommand, HabitQuery, HabitRepository, HabitRepositoryError};
use crate::domain::{Error, Habit, HabitDraft, HabitId};

fn map_repository_error(error: HabitRepositoryError) -> Error {
    Error::internal(error.to_string())
}

fn habit_not_found(id: HabitId) -> Error {
    Error::not_found(format!("habit {id} not found"))
}

/// Habit service implementing [`HabitCommand`] and [`HabitQuery`].
#[derive(Clone)]
pub struct HabitService<R> {
    habit_repo: Arc<R>,
}

impl<R> HabitService<R> {
    /// Create a new service over the habit repository.
    pub fn new(habit_repo: Arc<R>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl<R> HabitCommand for HabitService<R>
where
    R: HabitRepository,
{
    async fn create(&self, draft: HabitDraft) -> Result<Habit, Error> {
        let habit = self
            .habit_repo
            .create(&draft)
            .await
            .map_err(map_repository_error)?;
        debug!(habit_id = %habit.id(), "habit created");
        Ok(habit)
    }

    async fn update(&self, id: HabitId, draft: HabitDraft) -> Result<Habit, Error> {
        self.habit_repo
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| habit_not_found(id))
    }

    async fn delete(&self, id: HabitId) -> Result<(), Error> {
        let removed = self
            .habit_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            debug!(habit_id = %id, "delete requested for absent habit");
        }
        Ok(())
    }
}

#[async_trait]
impl<R> HabitQuery for HabitService<R>
where
    R: HabitRepository,
{
    async fn list(&self) -> Result<Vec<Habit>, Error> {
        self.habit_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: HabitId) -> Result<Habit, Error> {
        self.habit_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| habit_not_found(id))
    }
}

#[cfg(test)]
#[path = "habit_service_tests.rs"]
mod tests;

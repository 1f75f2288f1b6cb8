//! Driving port for habit reads.

use async_trait::async_trait;

use crate::domain::{Error, Habit, HabitId};

/// Driving port for listing and fetching habits.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitQuery: Send + Sync {
    /// Every habit, newest first.
    async fn list(&self) -> Result<Vec<Habit>, Error>;

    /// One habit; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get(&self, id: HabitId) -> Result<Habit, Error>;
}

/// Fixture query over an empty habit list.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHabitQuery;

#[async_trait]
impl HabitQuery for FixtureHabitQuery {
    async fn list(&self) -> Result<Vec<Habit>, Error> {
        Ok(Vec::new())
    }

    async fn get(&self, id: HabitId) -> Result<Habit, Error> {
        Err(Error::not_found(format!("habit {id} not found")))
    }
}

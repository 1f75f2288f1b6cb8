//! Driving port for habit mutations.

use async_trait::async_trait;

use crate::domain::{Error, Habit, HabitDraft, HabitId};

/// Driving port for creating, editing and removing habits.
///
/// # Examples
///
/// ```rust,no_run
/// # use habit_tracker::domain::ports::{FixtureHabitCommand, HabitCommand};
/// # use habit_tracker::domain::{HabitDraft, HabitName};
/// # async fn example() -> Result<(), habit_tracker::domain::Error> {
/// let command = FixtureHabitCommand;
/// let draft = HabitDraft::new(HabitName::new("Read").expect("valid"), None);
/// let habit = command.create(draft).await?;
/// assert_eq!(habit.name().as_str(), "Read");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HabitCommand: Send + Sync {
    /// Create a habit from a validated draft.
    async fn create(&self, draft: HabitDraft) -> Result<Habit, Error>;

    /// Replace the name and description of an existing habit.
    async fn update(&self, id: HabitId, draft: HabitDraft) -> Result<Habit, Error>;

    /// Delete a habit. Deleting an absent habit succeeds.
    async fn delete(&self, id: HabitId) -> Result<(), Error>;
}

/// Fixture command that echoes drafts back without storing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHabitCommand;

#[async_trait]
impl HabitCommand for FixtureHabitCommand {
    async fn create(&self, draft: HabitDraft) -> Result<Habit, Error> {
        let id = HabitId::new(1).map_err(|err| Error::internal(err.to_string()))?;
        Ok(Habit::new(id, draft, chrono::Utc::now()))
    }

    async fn update(&self, id: HabitId, draft: HabitDraft) -> Result<Habit, Error> {
        Ok(Habit::new(id, draft, chrono::Utc::now()))
    }

    async fn delete(&self, _id: HabitId) -> Result<(), Error> {
        Ok(())
    }
}

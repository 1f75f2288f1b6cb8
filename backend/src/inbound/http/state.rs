//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on the habit driving
//! ports, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::HabitService;
use crate::domain::ports::{HabitCommand, HabitQuery, HabitRepository};

/// Dependency bundle for habit handlers.
#[derive(Clone)]
pub struct HttpState {
    pub habits: Arc<dyn HabitCommand>,
    pub habits_query: Arc<dyn HabitQuery>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use habit_tracker::domain::ports::{FixtureHabitCommand, FixtureHabitQuery};
    /// use habit_tracker::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureHabitCommand), Arc::new(FixtureHabitQuery));
    /// let _query = state.habits_query.clone();
    /// ```
    pub fn new(habits: Arc<dyn HabitCommand>, habits_query: Arc<dyn HabitQuery>) -> Self {
        Self {
            habits,
            habits_query,
        }
    }

    /// Serve both ports from one [`HabitService`] over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: HabitRepository + 'static,
    {
        let service = Arc::new(HabitService::new(repo));
        Self::new(service.clone(), service)
    }
}

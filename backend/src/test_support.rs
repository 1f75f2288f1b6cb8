//! In-memory adapters for exercising the HTTP surfaces without PostgreSQL.
//!
//! Compiled for unit tests and behind the `test-support` feature for
//! integration tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{HabitRepository, HabitRepositoryError};
use crate::domain::{Habit, HabitDraft, HabitId};

#[derive(Debug)]
struct Store {
    last_id: i32,
    habits: Vec<Habit>,
    failure: Option<HabitRepositoryError>,
}

/// `HabitRepository` backed by a vector, with the same ordering and
/// id-assignment rules as the Diesel adapter.
///
/// ```
/// use habit_tracker::test_support::InMemoryHabitRepository;
/// use habit_tracker::domain::ports::HabitRepositoryError;
///
/// let repo = InMemoryHabitRepository::new();
/// repo.fail_with(HabitRepositoryError::connection("database is down"));
/// assert!(repo.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemoryHabitRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryHabitRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHabitRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                last_id: 0,
                habits: Vec::new(),
                failure: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: HabitRepositoryError) {
        self.lock().failure = Some(error);
    }

    /// Stop injecting failures.
    pub fn recover(&self) {
        self.lock().failure = None;
    }

    /// Drop every habit and restart ids at 1.
    pub fn reset(&self) {
        let mut store = self.lock();
        store.habits.clear();
        store.last_id = 0;
    }

    pub fn len(&self) -> usize {
        self.lock().habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn checked(&self) -> Result<MutexGuard<'_, Store>, HabitRepositoryError> {
        let store = self.lock();
        match &store.failure {
            Some(error) => Err(error.clone()),
            None => Ok(store),
        }
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn create(&self, draft: &HabitDraft) -> Result<Habit, HabitRepositoryError> {
        let mut store = self.checked()?;
        let next = store.last_id + 1;
        let id = HabitId::new(next).map_err(|err| HabitRepositoryError::query(err.to_string()))?;
        store.last_id = next;
        let habit = Habit::new(id, draft.clone(), Utc::now());
        store.habits.push(habit.clone());
        Ok(habit)
    }

    async fn list_all(&self) -> Result<Vec<Habit>, HabitRepositoryError> {
        let store = self.checked()?;
        let mut habits = store.habits.clone();
        habits.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(habits)
    }

    async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, HabitRepositoryError> {
        let store = self.checked()?;
        Ok(store.habits.iter().find(|habit| habit.id() == id).cloned())
    }

    async fn update(
        &self,
        id: HabitId,
        draft: &HabitDraft,
    ) -> Result<Option<Habit>, HabitRepositoryError> {
        let mut store = self.checked()?;
        let Some(slot) = store.habits.iter_mut().find(|habit| habit.id() == id) else {
            return Ok(None);
        };
        *slot = slot.revised(draft.clone());
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: HabitId) -> Result<bool, HabitRepositoryError> {
        let mut store = self.checked()?;
        let before = store.habits.len();
        store.habits.retain(|habit| habit.id() != id);
        Ok(store.habits.len() < before)
    }
}

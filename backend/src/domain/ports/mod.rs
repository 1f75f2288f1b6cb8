//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod habit_command;
mod habit_query;
mod habit_repository;

#[cfg(test)]
pub use habit_command::MockHabitCommand;
pub use habit_command::{FixtureHabitCommand, HabitCommand};
#[cfg(test)]
pub use habit_query::MockHabitQuery;
pub use habit_query::{FixtureHabitQuery, HabitQuery};
#[cfg(test)]
pub use habit_repository::MockHabitRepository;
pub use habit_repository::{FixtureHabitRepository, HabitRepository, HabitRepositoryError};

//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows (`models.rs`, `schema.rs`) and
//! domain types. Connections come from a `bb8` pool through `diesel-async`.
//!
//! ```ignore
//! use habit_tracker::outbound::persistence::{DbPool, DieselHabitRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hireme")).await?;
//! ensure_schema(&pool).await?;
//! let repo = DieselHabitRepository::new(pool);
//! ```

mod diesel_habit_repository;
mod models;
mod pool;
mod schema;
mod schema_bootstrap;

pub use diesel_habit_repository::DieselHabitRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
pub use schema_bootstrap::{SchemaBootstrapError, ensure_schema, reset_habits};

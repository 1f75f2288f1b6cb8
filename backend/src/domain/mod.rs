//! Domain primitives, aggregates and services.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Habit, HabitDraft, HabitId, HabitName: the habit aggregate.
//! - HabitService: implements the habit driving ports.

pub mod error;
pub mod habit;
mod habit_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::habit::{Habit, HabitDraft, HabitId, HabitName, HabitValidationError};
pub use self::habit_service::HabitService;
pub use self::trace_id::TraceId;

/// Convenient result alias for domain operations.
///
/// # Examples
/// ```
/// use habit_tracker::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<()> {
///     Err(Error::not_found("habit 1 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;

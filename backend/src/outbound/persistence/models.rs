//! Diesel row structs for the `habits` table.
//!
//! Internal to the persistence layer; repositories convert them to domain
//! types before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::habits;

/// Row read back from `habits`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = habits)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HabitRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable habit; `id` and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = habits)]
pub(crate) struct NewHabitRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

/// Changeset applied by updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = habits)]
pub(crate) struct HabitChangeset<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

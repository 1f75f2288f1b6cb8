//! Diesel table definitions.
//!
//! Must match the DDL in `schema_bootstrap.rs`.

diesel::table! {
    /// Tracked habits.
    habits (id) {
        /// Serial primary key.
        id -> Int4,
        /// Never blank; validated before insert.
        name -> Text,
        /// Empty string when not provided.
        description -> Text,
        /// Set by the database on insert.
        created_at -> Timestamptz,
    }
}

//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed habit storage using Diesel ORM.

pub mod persistence;

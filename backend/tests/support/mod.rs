//! Shared helper utilities for habit tracker integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! each suite pulls these helpers in with `mod support;`.

pub mod cluster_skip;
pub mod pg_embed;

pub use cluster_skip::handle_cluster_setup_failure;
pub use pg_embed::test_cluster;

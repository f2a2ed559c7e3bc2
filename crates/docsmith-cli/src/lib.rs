//! docsmith CLI library root.
//!
//! Re-exports internal modules so that integration tests can exercise the
//! config layer and backend wiring without going through argument parsing.

pub mod backends;
pub mod commands;
pub mod config;

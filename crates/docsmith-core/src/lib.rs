//! docsmith-core
//!
//! Pure domain types and storage key conventions.
//! Shared vocabulary of the docsmith system. No rendering or network dependency.

pub mod error;
pub mod models;
pub mod storage_keys;

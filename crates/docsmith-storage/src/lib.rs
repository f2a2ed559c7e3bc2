//! docsmith-storage
//!
//! The "documents" collection: a repository trait with in-memory,
//! local-directory, and S3-backed implementations.

pub mod client;
pub mod error;
pub mod file;
pub mod memory;
pub mod objects;
pub mod repository;
pub mod s3;
pub mod state;

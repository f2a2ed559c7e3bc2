//! docsmith-generate
//!
//! Content generation behind a pluggable trait: a deterministic template
//! stub and a client for hosted generation functions.

pub mod error;
pub mod generator;
pub mod http;
pub mod summary;
pub mod template;

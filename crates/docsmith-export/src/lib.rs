//! docsmith-export
//!
//! Content assembly, PDF + DOCX rendering, file naming, and delivery.

pub mod assemble;
pub mod deliver;
pub mod docx;
pub mod error;
pub mod export;
pub mod filename;
pub mod metrics;
pub mod pdf;
pub mod styles;

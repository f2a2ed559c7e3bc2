pub mod artifact;
pub mod document;
pub mod params;
pub mod record;
pub mod resume;

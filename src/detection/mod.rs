//! Project detection: type markers, manifest readers and structural flags

pub mod analyzer;
pub mod manifest;
pub mod markers;
pub mod structure;
pub mod types;

pub use analyzer::{analyze, ProjectAnalyzer};
pub use types::{ProjectInfo, ProjectType, Script};

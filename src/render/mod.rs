//! README rendering from detection results and user answers

pub mod answers;
pub mod readme;
pub mod sections;

pub use answers::Answers;
pub use readme::render;

//! repome - interactive README generator
//!
//! Inspects the current directory to work out what kind of project it is,
//! asks a handful of questions and renders a `README.md` from the answers.
//!
//! # Example Usage
//!
//! ```no_run
//! use repome::detection::analyze;
//! use repome::render::{render, Answers};
//! use std::path::Path;
//!
//! let info = analyze(Path::new("."));
//! let readme = render(&info, &Answers::default());
//! println!("{}", readme);
//! ```
//!
//! # Project Structure
//!
//! - [`detection`]: Project type, manifest and layout detection
//! - [`render`]: README template and its section builders
//! - [`cli`]: Argument parsing, prompts and the interactive run
//! - [`fs`]: Filesystem abstraction used by detection and output

pub mod cli;
pub mod config;
pub mod detection;
pub mod fs;
pub mod render;
pub mod util;

pub use config::{ConfigError, RepomeConfig};
pub use detection::{analyze, ProjectAnalyzer, ProjectInfo, ProjectType, Script};
pub use render::{render, Answers};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_repome() {
        assert_eq!(NAME, "repome");
    }
}

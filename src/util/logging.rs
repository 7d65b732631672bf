//! Structured logging setup
//!
//! Diagnostics use the `tracing` macros and are written to stderr so they
//! never interleave with the prompts on stdout. The subscriber can only be
//! installed once per process; later calls are ignored.
//!
//! # Example
//!
//! ```no_run
//! use repome::util::{init_logging, LoggingConfig};
//! use tracing::Level;
//!
//! init_logging(LoggingConfig::with_level(Level::DEBUG));
//! tracing::debug!("Detected project type: nodejs");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level for this crate's events
    pub level: Level,

    /// Emit one JSON object per event instead of text lines
    pub use_json: bool,

    /// Include the module target (e.g., repome::detection) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Debug level with targets, used by `--verbose`.
    pub fn development() -> Self {
        Self {
            level: Level::DEBUG,
            use_json: false,
            include_target: true,
            include_location: false,
        }
    }

    /// Builds a configuration from a level name, honouring `REPOME_LOG_JSON`.
    pub fn from_level_str(level_str: &str) -> Self {
        let level = parse_level(level_str);
        let base = if level == Level::DEBUG || level == Level::TRACE {
            Self::development()
        } else {
            Self::default()
        };

        let use_json = env::var("REPOME_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..base
        }
    }

    /// Filter directive applied when `RUST_LOG` is not set.
    pub fn directive(&self) -> String {
        format!(
            "{}={}",
            crate::NAME,
            self.level.as_str().to_ascii_lowercase()
        )
    }
}

/// Parses a log level, falling back to WARN for unknown names.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directive())
        };

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_file(config.include_location)
                        .with_line_number(config.include_location)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("Info"), Level::INFO);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("chatty"), Level::WARN);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.use_json);
    }

    #[test]
    fn test_from_level_str_debug_uses_development() {
        let config = LoggingConfig::from_level_str("debug");
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.include_target);
    }

    #[test]
    fn test_directive() {
        assert_eq!(
            LoggingConfig::with_level(Level::DEBUG).directive(),
            "repome=debug"
        );
    }

    #[test]
    fn test_init_twice_is_noop() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::development());
    }
}

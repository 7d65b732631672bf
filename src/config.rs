use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PROJECT_NAME: &str = "My Project";
pub const DEFAULT_DESCRIPTION: &str = "A wonderful project";
pub const DEFAULT_GITHUB_USERNAME: &str = "your-username";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_CONTRIBUTING: &str =
    "Contributions are welcome! Please feel free to submit a Pull Request.";
pub const DEFAULT_OUTPUT: &str = "README.md";
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Defaults offered at the prompts and the output location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepomeConfig {
    pub project_name: String,
    pub description: String,
    pub github_username: String,
    pub email: String,
    pub contributing: String,
    pub output: PathBuf,
    pub log_level: String,
}

impl Default for RepomeConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            github_username: DEFAULT_GITHUB_USERNAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            contributing: DEFAULT_CONTRIBUTING.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl RepomeConfig {
    /// Defaults overridden by any `REPOME_*` variables that are set and
    /// non-empty.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, fallback: String| {
            env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
        };

        Self {
            project_name: var("REPOME_PROJECT_NAME", defaults.project_name),
            description: var("REPOME_DESCRIPTION", defaults.description),
            github_username: var("REPOME_GITHUB_USERNAME", defaults.github_username),
            email: var("REPOME_EMAIL", defaults.email),
            contributing: var("REPOME_CONTRIBUTING", defaults.contributing),
            output: env::var("REPOME_OUTPUT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output),
            log_level: var("REPOME_LOG_LEVEL", defaults.log_level).to_lowercase(),
        }
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path cannot be empty".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = RepomeConfig::default();
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(config.output, PathBuf::from("README.md"));
        assert_eq!(config.log_level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_overrides() {
        let _guards = [
            EnvGuard::set("REPOME_GITHUB_USERNAME", "octocat"),
            EnvGuard::set("REPOME_EMAIL", "octo@example.com"),
            EnvGuard::set("REPOME_OUTPUT", "docs/README.md"),
            EnvGuard::set("REPOME_LOG_LEVEL", "DEBUG"),
        ];

        let config = RepomeConfig::from_env();

        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.email, "octo@example.com");
        assert_eq!(config.output, PathBuf::from("docs/README.md"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.contributing, DEFAULT_CONTRIBUTING);
    }

    #[test]
    #[serial]
    fn test_blank_environment_values_are_ignored() {
        let _guards = [
            EnvGuard::set("REPOME_PROJECT_NAME", "  "),
            EnvGuard::set("REPOME_OUTPUT", ""),
        ];

        let config = RepomeConfig::from_env();
        assert_eq!(config.project_name, DEFAULT_PROJECT_NAME);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_with_output_overrides() {
        let config = RepomeConfig::default().with_output(PathBuf::from("OUT.md"));
        assert_eq!(config.output, PathBuf::from("OUT.md"));
    }

    #[test]
    fn test_validation_rejects_empty_output() {
        let config = RepomeConfig::default().with_output(PathBuf::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(msg)) if msg.contains("Output path")
        ));
    }

    #[test]
    fn test_validation_rejects_unknown_log_level() {
        let config = RepomeConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

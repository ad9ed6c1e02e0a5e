// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Errors raised while loading a runtime configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ConfigError::Io { .. } => crate::logging::codes::config::CONFIG_READ_FAILED,
            ConfigError::Parse(_) => crate::logging::codes::config::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerPreferences {
    /// Reject an empty delimiter set at construction instead of on first scan
    pub reject_empty_delimiters: bool,

    /// Whether to record per-tokenizer metrics
    pub collect_metrics: bool,

    /// Whether to emit a debug event when the delimiter set is replaced
    pub log_delimiter_changes: bool,
}

impl TokenizerPreferences {
    /// Built-in defaults, ignoring `STRTOK_*` environment variables
    pub const fn fixed() -> Self {
        Self {
            reject_empty_delimiters: false,
            collect_metrics: false,
            log_delimiter_changes: true,
        }
    }
}

/// Built-in defaults overridden by `STRTOK_*` environment variables
impl Default for TokenizerPreferences {
    fn default() -> Self {
        let fixed = Self::fixed();
        Self {
            reject_empty_delimiters: env_flag(env_vars::TOKENIZER_REJECT_EMPTY_DELIMITERS)
                .unwrap_or(fixed.reject_empty_delimiters),
            collect_metrics: env_flag(env_vars::TOKENIZER_COLLECT_METRICS)
                .unwrap_or(fixed.collect_metrics),
            log_delimiter_changes: env_flag(env_vars::TOKENIZER_LOG_DELIMITER_CHANGES)
                .unwrap_or(fixed.log_delimiter_changes),
        }
    }
}

/// Log level as written in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Emit JSON lines instead of human-readable output
    pub use_structured_logging: bool,

    /// Whether console output is enabled at all
    pub enable_console_logging: bool,

    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env_flag(env_vars::LOGGING_USE_STRUCTURED).unwrap_or(false),
            enable_console_logging: env_flag(env_vars::LOGGING_ENABLE_CONSOLE).unwrap_or(true),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Warning),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub tokenizer: TokenizerPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Tokenizer
    pub const TOKENIZER_REJECT_EMPTY_DELIMITERS: &str = "STRTOK_REJECT_EMPTY_DELIMITERS";
    pub const TOKENIZER_COLLECT_METRICS: &str = "STRTOK_COLLECT_METRICS";
    pub const TOKENIZER_LOG_DELIMITER_CHANGES: &str = "STRTOK_LOG_DELIMITER_CHANGES";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "STRTOK_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "STRTOK_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "STRTOK_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("1"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [tokenizer]
            reject_empty_delimiters = true
            collect_metrics = true
            log_delimiter_changes = false

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert!(config.tokenizer.reject_empty_delimiters);
        assert!(config.tokenizer.collect_metrics);
        assert!(!config.tokenizer.log_delimiter_changes);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_invalid_toml() {
        let result = RuntimeConfig::from_toml_str("[tokenizer]\ncollect_metrics = \"yes\"");
        assert_matches!(result, Err(ConfigError::Parse(_)));
        assert_eq!(
            result.unwrap_err().error_code(),
            crate::logging::codes::config::CONFIG_INVALID
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strtok.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[logging]\nuse_structured_logging = true").unwrap();

        let config = RuntimeConfig::from_file(&path).unwrap();
        assert!(config.logging.use_structured_logging);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuntimeConfig::from_file(dir.path().join("absent.toml"));
        assert_matches!(result, Err(ConfigError::Io { .. }));
        assert_eq!(
            result.unwrap_err().error_code(),
            crate::logging::codes::config::CONFIG_READ_FAILED
        );
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(env_vars::TOKENIZER_REJECT_EMPTY_DELIMITERS.starts_with("STRTOK_"));
        assert!(env_vars::LOGGING_MIN_LEVEL.starts_with("STRTOK_"));
    }
}

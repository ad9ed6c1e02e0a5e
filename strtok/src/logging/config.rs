//! Logging configuration access
//!
//! Buffer limits come from compile-time constants; level and output format
//! come from runtime preferences, stored once per process.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();
static FALLBACK_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Store runtime preferences; may only be called once per process
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

/// Stored runtime preferences, or defaults read from the environment once
fn get_runtime_preferences() -> &'static LoggingPreferences {
    RUNTIME_PREFERENCES
        .get()
        .unwrap_or_else(|| FALLBACK_PREFERENCES.get_or_init(LoggingPreferences::default))
}

pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences()
        .min_log_level
        .to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_console_logging() -> bool {
    get_runtime_preferences().enable_console_logging
}

pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE > 1_000_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    if LOG_BUFFER_SIZE < 100 {
        return Err(format!("Log buffer size too small: {}", LOG_BUFFER_SIZE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_fallback_preferences_are_cached() {
        assert!(std::ptr::eq(
            get_runtime_preferences(),
            get_runtime_preferences()
        ));
    }

    #[test]
    fn test_buffer_size_matches_constant() {
        assert_eq!(get_error_buffer_size(), LOG_BUFFER_SIZE);
    }
}

//! Configuration module for strtok
//!
//! Compile-time constants live in [`constants`]; user-adjustable behavior is
//! described by the serde types in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, LoggingPreferences, RuntimeConfig, TokenizerPreferences};

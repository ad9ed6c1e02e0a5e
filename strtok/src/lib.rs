// Internal modules
pub mod config;
#[macro_use]
pub mod logging;
pub mod tokenizer;
pub mod utils;

// Re-export key types for library consumers
pub use config::{RuntimeConfig, TokenizerPreferences};
pub use tokenizer::{DelimiterSet, StringTokenizer, TokenizerError, TokenizerMetrics};
pub use utils::{Position, Span, Spanned};

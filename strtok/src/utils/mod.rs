//! Shared location types used by the tokenizer and the logging layer.

pub mod span;

pub use span::{Position, SourceMap, Span, Spanned};

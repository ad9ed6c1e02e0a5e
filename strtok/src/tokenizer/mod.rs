//! Delimiter-based tokenization
//!
//! [`StringTokenizer`] is the stateful cursor API. The free functions below
//! cover the common one-shot cases and report completion through the global
//! logging system.

pub mod delimiters;
pub mod string_tokenizer;

pub use delimiters::DelimiterSet;
pub use string_tokenizer::{StringTokenizer, TokenizerError, TokenizerMetrics};

use crate::logging::codes;
use crate::log_success;

/// Split `text` on any character in `delimiters`, dropping the delimiters
pub fn split(text: &str, delimiters: &str) -> Result<Vec<String>, TokenizerError> {
    drain(StringTokenizer::with_delimiters(text, delimiters))
}

/// Split `text` keeping each delimiter as a one-character token
pub fn split_keep_delimiters(text: &str, delimiters: &str) -> Result<Vec<String>, TokenizerError> {
    drain(StringTokenizer::with_return_delimiters(text, delimiters, true))
}

/// Split on the default whitespace delimiters
pub fn split_whitespace(text: &str) -> Vec<String> {
    StringTokenizer::new(text).collect()
}

/// Number of tokens `split` would return
pub fn count(text: &str, delimiters: &str) -> Result<usize, TokenizerError> {
    StringTokenizer::with_delimiters(text, delimiters).count_tokens()
}

fn drain(mut tokenizer: StringTokenizer) -> Result<Vec<String>, TokenizerError> {
    let mut tokens = Vec::with_capacity(tokenizer.count_tokens()?);
    while tokenizer.has_more_tokens()? {
        tokens.push(tokenizer.next_token()?);
    }

    log_success!(codes::success::TOKENIZATION_COMPLETE, "Input fully tokenized",
        "length" => tokenizer.len(),
        "tokens" => tokens.len(),
        "return_delimiters" => tokenizer.returns_delimiters()
    );

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_split() {
        assert_eq!(split("a,b,,c", ",").unwrap(), ["a", "b", "c"]);
        assert!(split("", ",").unwrap().is_empty());
    }

    #[test]
    fn test_split_keep_delimiters_reconstructs_text() {
        let text = "key = value; other=1";
        let tokens = split_keep_delimiters(text, " =;").unwrap();
        assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn test_split_whitespace() {
        assert_eq!(
            split_whitespace("  the quick\tbrown\n\nfox "),
            ["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(count("a b c", " ").unwrap(), 3);
        assert_eq!(count("", "").unwrap(), 0);
    }

    #[test]
    fn test_split_empty_delimiters() {
        assert_matches!(split("abc", ""), Err(TokenizerError::EmptyDelimiterSet));
    }
}

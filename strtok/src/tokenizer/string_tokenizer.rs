//! Core delimiter-driven tokenizer
//!
//! Splits a code point buffer into tokens separated by runs of delimiter
//! characters, with an optional mode in which each delimiter is returned as a
//! one-character token of its own.

use super::delimiters::DelimiterSet;
use crate::config::compile_time::tokenizer::{DEFAULT_DELIMITERS, MAX_LOGGED_TOKEN_PREVIEW};
use crate::config::runtime::TokenizerPreferences;
use crate::logging::codes;
use crate::utils::{SourceMap, Spanned};
use crate::{log_debug, log_error};

/// Tokenizer misuse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    #[error("Delimiter set is empty")]
    EmptyDelimiterSet,

    #[error("No tokens remain at position {position} (text length {length})")]
    NoSuchToken { position: usize, length: usize },
}

impl TokenizerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenizerError::EmptyDelimiterSet => codes::tokenizer::EMPTY_DELIMITER_SET,
            TokenizerError::NoSuchToken { .. } => codes::tokenizer::NO_SUCH_TOKEN,
        }
    }
}

/// Per-tokenizer counters, recorded when `collect_metrics` is enabled
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenizerMetrics {
    pub tokens_emitted: usize,
    /// Tokens that were a single retained delimiter
    pub delimiter_tokens: usize,
    pub delimiter_changes: usize,
    /// `next_token` calls that resumed from a cached `has_more_tokens` scan
    pub lookahead_reuses: usize,
    /// `next_token` calls that had to skip delimiters again
    pub rescans: usize,
    /// Longest token emitted, in code points
    pub max_token_length: usize,
}

impl TokenizerMetrics {
    fn record_token(&mut self, length: usize, is_delimiter: bool) {
        self.tokens_emitted += 1;
        self.max_token_length = self.max_token_length.max(length);
        if is_delimiter {
            self.delimiter_tokens += 1;
        }
    }
}

/// Splits text into tokens on a replaceable set of single-character
/// delimiters.
///
/// The usual loop guards each [`next_token`](Self::next_token) with
/// [`has_more_tokens`](Self::has_more_tokens); the skip performed by the
/// guard is cached and reused so the delimiter run is only scanned once.
///
/// ```
/// use strtok::StringTokenizer;
///
/// let mut tokens = StringTokenizer::with_delimiters("a,b,,c", ",");
/// let mut out = Vec::new();
/// while tokens.has_more_tokens()? {
///     out.push(tokens.next_token()?);
/// }
/// assert_eq!(out, ["a", "b", "c"]);
/// # Ok::<(), strtok::TokenizerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringTokenizer {
    text: Vec<char>,
    delimiters: DelimiterSet,
    return_delimiters: bool,
    position: usize,
    lookahead: Option<usize>,
    delimiters_changed: bool,
    source_map: SourceMap,
    preferences: TokenizerPreferences,
    metrics: TokenizerMetrics,
}

impl StringTokenizer {
    /// Tokenize on whitespace (space, tab, newline, carriage return, form feed)
    pub fn new(text: &str) -> Self {
        Self::with_delimiters(text, DEFAULT_DELIMITERS)
    }

    pub fn with_delimiters(text: &str, delimiters: &str) -> Self {
        Self::with_return_delimiters(text, delimiters, false)
    }

    /// When `return_delimiters` is set every delimiter character is emitted
    /// as a token of its own instead of being skipped.
    ///
    /// An empty delimiter set is accepted here and reported on first use.
    /// Uses [`TokenizerPreferences::fixed`]; the environment is not consulted.
    pub fn with_return_delimiters(text: &str, delimiters: &str, return_delimiters: bool) -> Self {
        Self::build(
            text,
            delimiters,
            return_delimiters,
            TokenizerPreferences::fixed(),
        )
    }

    /// Construct with explicit preferences. With `reject_empty_delimiters`
    /// an empty delimiter set fails here rather than on first use.
    pub fn with_preferences(
        text: &str,
        delimiters: &str,
        return_delimiters: bool,
        preferences: TokenizerPreferences,
    ) -> Result<Self, TokenizerError> {
        let tokenizer = Self::build(text, delimiters, return_delimiters, preferences);

        if tokenizer.preferences.reject_empty_delimiters && tokenizer.delimiters.is_empty() {
            return Err(tokenizer.report(TokenizerError::EmptyDelimiterSet));
        }

        Ok(tokenizer)
    }

    fn build(
        text: &str,
        delimiters: &str,
        return_delimiters: bool,
        preferences: TokenizerPreferences,
    ) -> Self {
        let text: Vec<char> = text.chars().collect();
        let delimiters = DelimiterSet::new(delimiters);

        log_debug!("Tokenizer created",
            "length" => text.len(),
            "delimiters" => &delimiters,
            "max_code_point" => delimiters.max_code_point(),
            "return_delimiters" => return_delimiters
        );

        let source_map = SourceMap::new(&text);

        Self {
            text,
            delimiters,
            return_delimiters,
            position: 0,
            lookahead: None,
            delimiters_changed: false,
            source_map,
            preferences,
            metrics: TokenizerMetrics::default(),
        }
    }

    /// Whether another token is available. Caches the delimiter skip for the
    /// following `next_token` call; never moves the cursor.
    pub fn has_more_tokens(&mut self) -> Result<bool, TokenizerError> {
        let lookahead = self.skip_delimiters(self.position)?;
        self.lookahead = Some(lookahead);
        Ok(lookahead < self.text.len())
    }

    /// Return the next token and advance past it
    pub fn next_token(&mut self) -> Result<String, TokenizerError> {
        let (start, end) = self.advance()?;
        Ok(self.text[start..end].iter().collect())
    }

    /// Replace the delimiter set, then return the next token under the new
    /// set. The replacement stays in effect for later calls.
    pub fn next_token_with(&mut self, delimiters: &str) -> Result<String, TokenizerError> {
        self.delimiters = DelimiterSet::new(delimiters);
        self.delimiters_changed = true;
        self.lookahead = None;

        if self.preferences.collect_metrics {
            self.metrics.delimiter_changes += 1;
        }
        if self.preferences.log_delimiter_changes {
            log_debug!("Delimiter set replaced",
                "position" => self.position,
                "delimiters" => &self.delimiters
            );
        }

        self.next_token()
    }

    /// Like [`next_token`](Self::next_token), with the token's location
    pub fn next_spanned_token(&mut self) -> Result<Spanned<String>, TokenizerError> {
        let (start, end) = self.advance()?;
        let token = self.text[start..end].iter().collect();
        Ok(Spanned::new(token, self.source_map.span(start, end)))
    }

    /// Number of tokens `next_token` would still produce with the current
    /// delimiter set. Does not touch the cursor or the cached lookahead.
    pub fn count_tokens(&self) -> Result<usize, TokenizerError> {
        let length = self.text.len();
        let mut count = 0;
        let mut position = self.position;

        while position < length {
            position = self.skip_delimiters(position)?;
            if position >= length {
                break;
            }
            position = self.scan_token(position);
            count += 1;
        }

        Ok(count)
    }

    /// Cursor offset in code points
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the source text in code points
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Unconsumed text from the cursor onward, leading delimiters included
    pub fn remaining(&self) -> String {
        self.text[self.position..].iter().collect()
    }

    pub fn delimiters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    pub fn returns_delimiters(&self) -> bool {
        self.return_delimiters
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn preferences(&self) -> &TokenizerPreferences {
        &self.preferences
    }

    pub fn metrics(&self) -> &TokenizerMetrics {
        &self.metrics
    }

    // ========================================================================
    // Private scanning
    // ========================================================================

    /// Shared body of the `next_*` operations; returns the token bounds
    fn advance(&mut self) -> Result<(usize, usize), TokenizerError> {
        self.position = match self.lookahead {
            Some(lookahead) if !self.delimiters_changed => {
                if self.preferences.collect_metrics {
                    self.metrics.lookahead_reuses += 1;
                }
                lookahead
            }
            _ => {
                if self.preferences.collect_metrics {
                    self.metrics.rescans += 1;
                }
                self.skip_delimiters(self.position)?
            }
        };

        self.delimiters_changed = false;
        self.lookahead = None;

        if self.position >= self.text.len() {
            return Err(self.report(TokenizerError::NoSuchToken {
                position: self.position,
                length: self.text.len(),
            }));
        }

        let start = self.position;
        self.position = self.scan_token(start);

        if self.preferences.collect_metrics {
            let is_delimiter = self.return_delimiters && self.delimiters.contains(self.text[start]);
            self.metrics.record_token(self.position - start, is_delimiter);
        }

        log_debug!("Token scanned",
            "start" => start,
            "end" => self.position,
            "preview" => self.text[start..self.position]
                .iter()
                .take(MAX_LOGGED_TOKEN_PREVIEW)
                .collect::<String>()
                .escape_debug()
        );

        Ok((start, self.position))
    }

    /// First position at or after `start` that is not a delimiter. Returns
    /// `start` unchanged when delimiters are retained as tokens.
    fn skip_delimiters(&self, start: usize) -> Result<usize, TokenizerError> {
        if self.delimiters.is_empty() {
            return Err(self.report(TokenizerError::EmptyDelimiterSet));
        }

        let mut position = start;
        if !self.return_delimiters {
            while position < self.text.len() && self.delimiters.contains(self.text[position]) {
                position += 1;
            }
        }

        Ok(position)
    }

    /// End of the token starting at `start`. A retained delimiter at `start`
    /// is a token of exactly one character.
    fn scan_token(&self, start: usize) -> usize {
        let mut position = start;
        while position < self.text.len() && !self.delimiters.contains(self.text[position]) {
            position += 1;
        }

        if self.return_delimiters && position == start && position < self.text.len() {
            position += 1;
        }

        position
    }

    fn report(&self, error: TokenizerError) -> TokenizerError {
        let span = self.source_map.span(self.position, self.position);
        log_error!(error.error_code(), &error.to_string(),
            span = span,
            "position" => self.position,
            "length" => self.text.len(),
            "delimiters" => &self.delimiters
        );
        error
    }
}

/// Yields tokens until the text is exhausted. Iteration also stops on a
/// tokenizer error such as an empty delimiter set; use the explicit methods
/// when that case must be told apart.
impl Iterator for StringTokenizer {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_more_tokens() {
            Ok(true) => self.next_token().ok(),
            _ => None,
        }
    }
}

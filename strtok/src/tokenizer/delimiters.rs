//! Delimiter set with a cached upper bound for fast rejection

use std::fmt;

/// Ordered, de-duplicated set of single code point delimiters.
///
/// Membership is tested in two steps: a character above the highest code
/// point in the set is rejected immediately, anything else is looked up in
/// the set itself. The bound never decides membership on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: Vec<char>,
    max_code_point: u32,
}

impl DelimiterSet {
    pub fn new(delimiters: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(delimiters.len());
        for ch in delimiters.chars() {
            if !chars.contains(&ch) {
                chars.push(ch);
            }
        }
        let max_code_point = chars.iter().map(|&c| c as u32).max().unwrap_or(0);

        Self {
            chars,
            max_code_point,
        }
    }

    pub fn contains(&self, ch: char) -> bool {
        (ch as u32) <= self.max_code_point && self.chars.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Highest code point in the set, 0 when empty
    pub fn max_code_point(&self) -> u32 {
        self.max_code_point
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl From<&str> for DelimiterSet {
    fn from(delimiters: &str) -> Self {
        Self::new(delimiters)
    }
}

impl fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.as_string().escape_debug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_code_point() {
        assert_eq!(DelimiterSet::new(",;").max_code_point(), ';' as u32);
        assert_eq!(DelimiterSet::new("").max_code_point(), 0);
        assert_eq!(DelimiterSet::new("a€").max_code_point(), '€' as u32);
    }

    #[test]
    fn test_membership_needs_both_checks() {
        let set = DelimiterSet::new("z");
        // Below the bound but not a member
        assert!(!set.contains('a'));
        // Above the bound
        assert!(!set.contains('~'));
        assert!(set.contains('z'));
    }

    #[test]
    fn test_empty_set_contains_nothing() {
        let set = DelimiterSet::new("");
        assert!(set.is_empty());
        assert!(!set.contains('\0'));
    }

    #[test]
    fn test_duplicates_collapse_in_order() {
        let set = DelimiterSet::from(",:,;:");
        assert_eq!(set.len(), 3);
        assert_eq!(set.chars(), &[',', ':', ';']);
        assert_eq!(set.as_string(), ",:;");
    }

    #[test]
    fn test_display_escapes_whitespace() {
        let set = DelimiterSet::new(" \t\n");
        assert_eq!(set.to_string(), "\" \\t\\n\"");
    }
}

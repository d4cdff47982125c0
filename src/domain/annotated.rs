//! Annotated line domain type

use std::fmt;

/// A source line paired with its 1-based index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// 1-based line number
    pub index: usize,
    /// Line text without trailing whitespace
    pub text: String,
}

impl AnnotatedLine {
    /// Create a new annotated line, stripping the terminator and trailing whitespace
    pub fn new(index: usize, raw: &str) -> Self {
        Self {
            index,
            text: raw.trim_end().to_string(),
        }
    }
}

impl fmt::Display for AnnotatedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}: {}", self.index, self.text)
    }
}

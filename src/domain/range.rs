//! Line range domain type
//!
//! An inclusive, 1-based window over the lines of a file.

use std::fmt;

/// Inclusive 1-based line window
///
/// A missing bound is unbounded in that direction. A bound of `0` is treated
/// as missing. `start <= end` is not enforced: an inverted range simply
/// selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineRange {
    start: Option<usize>,
    end: Option<usize>,
}

impl LineRange {
    /// Create a new range from optional bounds
    pub fn new(start: Option<usize>, end: Option<usize>) -> Self {
        Self {
            start: start.filter(|&s| s > 0),
            end: end.filter(|&e| e > 0),
        }
    }

    /// Line `index` comes before the window opens
    pub fn is_before(&self, index: usize) -> bool {
        self.start.is_some_and(|s| index < s)
    }

    /// Line `index` comes after the window closed; reading can stop
    pub fn is_past(&self, index: usize) -> bool {
        self.end.is_some_and(|e| index > e)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (None, None) => write!(f, "all lines"),
            (Some(s), None) => write!(f, "lines {}-", s),
            (None, Some(e)) => write!(f, "lines 1-{}", e),
            (Some(s), Some(e)) => write!(f, "lines {}-{}", s, e),
        }
    }
}

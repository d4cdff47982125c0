//! Output formatting utilities
//!
//! Console printing, file persistence and status messages shared by the
//! command handlers.

use std::fmt::{self, Display};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Print each item on its own line
pub fn print_lines<W: Write, T: Display>(out: &mut W, items: &[T]) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

/// Join items with newlines, without a trailing newline
pub fn join_lines<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write text to a file, replacing any previous content
pub fn write_text(path: &Path, text: &str) -> io::Result<()> {
    fs::write(path, text)?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Kind of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Info,
}

/// Status message shown to the user
#[derive(Debug, Clone)]
pub struct Message {
    pub message: String,
    pub status: Status,
}

impl Message {
    /// Operation completed
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Status::Success,
        }
    }

    /// Operation could not be carried out
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Status::Failure,
        }
    }

    /// Plain informational note
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Status::Info,
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Success => write!(f, "✅ {}", self.message),
            Status::Failure => write!(f, "❌ {}", self.message),
            Status::Info => f.write_str(&self.message),
        }
    }
}

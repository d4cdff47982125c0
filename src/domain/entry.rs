//! Directory tree entry types
//!
//! Provides the connector glyphs, file info suffixes and rendered tree
//! entries produced by the tree walker.

use std::fmt;
use std::io;
use thiserror::Error;

/// Box-drawing connector placed before an entry name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// Entry has siblings after it
    Tee,
    /// Last entry at its level
    Corner,
}

impl Connector {
    /// Pick the connector for a sibling position
    pub fn for_position(index: usize, count: usize) -> Self {
        if index + 1 == count {
            Connector::Corner
        } else {
            Connector::Tee
        }
    }

    /// Glyph rendered before the entry name
    pub const fn glyph(&self) -> &'static str {
        match self {
            Connector::Tee => "├── ",
            Connector::Corner => "└── ",
        }
    }

    /// Prefix extension for children of this entry
    pub const fn child_indent(&self) -> &'static str {
        match self {
            Connector::Tee => "│   ",
            Connector::Corner => "    ",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Why the info for a file could not be produced
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoError {
    /// Source file could not be read for line counting
    #[error("failed to read file: {0}")]
    Read(io::ErrorKind),

    /// File metadata could not be queried for its size
    #[error("failed to read metadata: {0}")]
    Metadata(io::ErrorKind),
}

/// Info suffix attached to a file entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileInfo {
    /// Line count of a source file
    Lines(usize),
    /// Size in whole kilobytes (floored)
    Kilobytes(u64),
    /// Info lookup failed; traversal carried on
    Unreadable(InfoError),
}

impl FileInfo {
    /// Build a size suffix from a byte count
    pub fn from_bytes(len: u64) -> Self {
        FileInfo::Kilobytes(len / 1024)
    }

    /// Check if the lookup failed
    pub fn is_error(&self) -> bool {
        matches!(self, FileInfo::Unreadable(_))
    }
}

impl fmt::Display for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileInfo::Lines(n) => write!(f, "({} lines)", n),
            FileInfo::Kilobytes(kb) => write!(f, "({} KB)", kb),
            FileInfo::Unreadable(_) => write!(f, "(error reading file)"),
        }
    }
}

/// What kind of node an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File(FileInfo),
}

/// One rendered line of the tree listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Accumulated indentation from enclosing directories
    pub prefix: String,
    /// Connector for this entry's sibling position
    pub connector: Connector,
    /// File or directory name
    pub name: String,
    /// Directory, or file with its info suffix
    pub kind: EntryKind,
}

impl TreeEntry {
    /// Create a directory entry
    pub fn directory(prefix: &str, connector: Connector, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector,
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Create a file entry
    pub fn file(
        prefix: &str,
        connector: Connector,
        name: impl Into<String>,
        info: FileInfo,
    ) -> Self {
        Self {
            prefix: prefix.to_string(),
            connector,
            name: name.into(),
            kind: EntryKind::File(info),
        }
    }

    /// Info suffix for file entries
    pub fn info(&self) -> Option<FileInfo> {
        match self.kind {
            EntryKind::File(info) => Some(info),
            EntryKind::Directory => None,
        }
    }
}

impl fmt::Display for TreeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EntryKind::Directory => write!(f, "{}{}{}/", self.prefix, self.connector, self.name),
            EntryKind::File(info) => {
                write!(f, "{}{}{} {}", self.prefix, self.connector, self.name, info)
            }
        }
    }
}

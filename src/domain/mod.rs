//! Domain models for devutils
//!
//! Plain value types shared by the services and commands.

pub mod annotated;
pub mod entry;
pub mod range;

pub use annotated::AnnotatedLine;
pub use entry::{Connector, EntryKind, FileInfo, InfoError, TreeEntry};
pub use range::LineRange;

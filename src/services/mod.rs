//! Service layer
//!
//! Services hold the logic behind each command and return plain data;
//! printing and persisting happen in the command handlers.

pub mod annotator;
pub mod text;
pub mod tree_walker;

pub use annotator::{annotate_file, annotate_reader};
pub use text::{count_lines, UniversalLines};
pub use tree_walker::{file_info, TreeWalker};

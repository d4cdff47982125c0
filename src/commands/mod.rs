//! Command handlers
//!
//! Each command handler orchestrates the execution of one binary.

pub mod project_structure;
pub mod view_lines;

pub use project_structure::run_project_structure;
pub use view_lines::run_view_lines;

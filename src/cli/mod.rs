//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod output;

pub use args::{parse_or_exit, ProjectStructureCli, ViewLinesCli};

//! devutils - small developer utilities
//!
//! This library backs two binaries: `view-lines`, which prints a file with
//! line numbers, and `project-structure`, which prints an annotated tree of
//! a project directory.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output helpers
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`services`]: Line annotation and tree walking

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AppError, Result};

//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Tree printer settings
    pub tree: TreeConfig,
}

/// General configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Tree printer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Directory names excluded from the listing
    pub skip_dirs: BTreeSet<String>,
    /// File name suffixes excluded from the listing
    pub skip_exts: BTreeSet<String>,
    /// File the listing is saved to
    pub output_file: PathBuf,
    /// Suffix of files annotated with a line count instead of a size
    pub source_ext: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            skip_dirs: [
                ".git",
                "__pycache__",
                ".idea",
                ".vscode",
                ".mypy_cache",
                ".pytest_cache",
                "node_modules",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            skip_exts: [".pyc", ".pyo", ".log", ".tmp"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_file: PathBuf::from("project_structure.txt"),
            source_ext: ".py".to_string(),
        }
    }
}

impl TreeConfig {
    /// Check if an entry with this name is left out of the listing
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
            || self
                .skip_exts
                .iter()
                .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Check if a file gets a line count
    pub fn is_source(&self, name: &str) -> bool {
        name.ends_with(self.source_ext.as_str())
    }
}

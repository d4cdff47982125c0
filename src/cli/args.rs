//! CLI argument definitions using clap derive
//!
//! Defines the command-line surface of both binaries.

use crate::domain::LineRange;

use clap::Parser;
use std::path::PathBuf;

/// Print a file with line numbers
///
/// Optionally restrict the output to an inclusive line range and save the
/// numbered lines to a file.
#[derive(Parser, Debug)]
#[command(name = "view-lines")]
#[command(author, version, about, long_about = None)]
pub struct ViewLinesCli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// File to print
    pub file: PathBuf,

    /// First line to print (1-based)
    pub start: Option<usize>,

    /// Last line to print (inclusive)
    pub end: Option<usize>,

    /// Also write the numbered lines to this file
    pub output: Option<PathBuf>,
}

impl ViewLinesCli {
    /// Line window selected on the command line
    pub fn range(&self) -> LineRange {
        LineRange::new(self.start, self.end)
    }
}

/// Print the project structure of the current directory
///
/// Python files are annotated with their line count, other files with their
/// size. The listing is also saved to a file.
#[derive(Parser, Debug)]
#[command(name = "project-structure")]
#[command(author, version, about, long_about = None)]
pub struct ProjectStructureCli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "PROJECT_STRUCTURE_CONFIG")]
    pub config: Option<String>,
}

/// Parse arguments, exiting with status 1 on a usage error
///
/// `--help` and `--version` still exit with status 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}

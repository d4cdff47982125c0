//! View-lines command implementation
//!
//! Prints a file with line numbers and optionally saves the result.

use crate::cli::args::ViewLinesCli;
use crate::cli::output::{join_lines, print_lines, write_text, Message};
use crate::error::{AppError, Result};
use crate::services::annotate_file;

use std::io::Write;

/// Execute the view-lines command
///
/// A missing input file is reported to `out` and is not an error.
pub fn run_view_lines<W: Write>(args: &ViewLinesCli, out: &mut W) -> Result<()> {
    let lines = match annotate_file(&args.file, args.range()) {
        Err(AppError::FileNotFound(path)) => {
            log::warn!("Input file {} does not exist", path.display());
            writeln!(
                out,
                "{}",
                Message::failure(format!("File not found: {}", path.display()))
            )?;
            return Ok(());
        }
        result => result?,
    };

    print_lines(out, &lines)?;

    if let Some(output) = &args.output {
        write_text(output, &join_lines(&lines))?;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            Message::success(format!("Output written to {}", output.display()))
        )?;
    }

    Ok(())
}

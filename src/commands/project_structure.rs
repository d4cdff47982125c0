//! Project-structure command implementation
//!
//! Prints the annotated directory tree and saves it to the configured
//! output file.

use crate::cli::output::{join_lines, print_lines, write_text, Message};
use crate::config::TreeConfig;
use crate::error::Result;
use crate::services::TreeWalker;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Execute the project-structure command for `root`
pub fn run_project_structure<W: Write>(root: &Path, config: &TreeConfig, out: &mut W) -> Result<()> {
    let root = absolute_root(root)?;
    let header = format!("Project structure for: {}", root.display());
    writeln!(out, "{}", header)?;
    writeln!(out)?;

    let entries = TreeWalker::new(config).walk(&root)?;
    log::debug!("Collected {} entries under {}", entries.len(), root.display());
    let unreadable = entries
        .iter()
        .filter(|e| e.info().is_some_and(|i| i.is_error()))
        .count();
    if unreadable > 0 {
        log::warn!("{} file(s) under {} could not be inspected", unreadable, root.display());
    }
    print_lines(out, &entries)?;

    let text = format!("{}\n\n{}", header, join_lines(&entries));
    write_text(&config.output_file, &text)?;

    writeln!(out)?;
    writeln!(
        out,
        "{}",
        Message::info(format!(
            "Saved structure to '{}'",
            config.output_file.display()
        ))
    )?;

    Ok(())
}

fn absolute_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        Ok(root.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(root))
    }
}

//! Line annotation service
//!
//! Reads a file and numbers the lines that fall inside a [`LineRange`].

use crate::domain::{AnnotatedLine, LineRange};
use crate::error::{AppError, Result};
use crate::services::text::UniversalLines;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Annotate the lines of the file at `path` that fall inside `range`
///
/// Returns [`AppError::FileNotFound`] when the path does not exist. Any
/// other read failure is returned as [`AppError::Io`].
pub fn annotate_file(path: &Path, range: LineRange) -> Result<Vec<AnnotatedLine>> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let lines = annotate_reader(BufReader::new(file), range)?;
    log::debug!(
        "Annotated {} line(s) of {} ({})",
        lines.len(),
        path.display(),
        range
    );
    Ok(lines)
}

/// Annotate lines from any buffered reader
///
/// `\n`, `\r\n` and a bare `\r` all end a line. Reading stops as soon as
/// the line counter passes the end of the range.
pub fn annotate_reader<R: BufRead>(reader: R, range: LineRange) -> io::Result<Vec<AnnotatedLine>> {
    let mut annotated = Vec::new();

    for (offset, line) in UniversalLines::new(reader).enumerate() {
        let index = offset + 1;
        if range.is_past(index) {
            break;
        }

        let line = line?;
        if range.is_before(index) {
            continue;
        }

        annotated.push(AnnotatedLine::new(index, &line));
    }

    Ok(annotated)
}

//! Line splitting with universal newlines
//!
//! `\n`, `\r\n` and a bare `\r` each end exactly one line.

use std::io::{self, BufRead, Read};

/// Iterator over the lines of a buffered reader
///
/// Yields each line without its terminator. A line that is not valid UTF-8
/// yields an [`io::ErrorKind::InvalidData`] error.
pub struct UniversalLines<R> {
    reader: R,
}

impl<R: BufRead> UniversalLines<R> {
    /// Wrap a buffered reader
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read the raw bytes of the next line into `buf`
    ///
    /// Returns `false` once the reader is exhausted.
    fn read_raw(&mut self, buf: &mut Vec<u8>) -> io::Result<bool> {
        let mut read_any = false;

        loop {
            let available = match self.reader.fill_buf() {
                Ok(b) => b,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(read_any);
            }
            read_any = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    let terminator = available[pos];
                    buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    if terminator == b'\r' {
                        self.skip_lf_after_cr()?;
                    }
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }

    fn skip_lf_after_cr(&mut self) -> io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(next) => {
                    if next.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.read_raw(&mut buf) {
            Ok(false) => None,
            Ok(true) => Some(
                String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Count lines in a byte stream
///
/// Works on raw bytes, so content that is not valid UTF-8 is still counted.
/// A final line without a terminator counts as a line.
pub fn count_lines<R: Read>(mut reader: R) -> io::Result<usize> {
    let mut buf = [0u8; 8192];
    let mut count = 0;
    let mut after_cr = false;
    let mut last = None;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        for &b in &buf[..n] {
            match b {
                b'\r' => count += 1,
                // second half of a \r\n pair was already counted
                b'\n' if !after_cr => count += 1,
                _ => {}
            }
            after_cr = b == b'\r';
        }
        last = Some(buf[n - 1]);
    }

    if matches!(last, Some(b) if b != b'\n' && b != b'\r') {
        count += 1;
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn split(data: &[u8]) -> Vec<String> {
        UniversalLines::new(Cursor::new(data))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(Cursor::new("")).unwrap(), 0);
        assert_eq!(count_lines(Cursor::new("a")).unwrap(), 1);
        assert_eq!(count_lines(Cursor::new("a\n")).unwrap(), 1);
        assert_eq!(count_lines(Cursor::new("a\nb")).unwrap(), 2);
        assert_eq!(count_lines(Cursor::new("\n\n\n")).unwrap(), 3);
    }

    #[test]
    fn test_count_lines_mixed_terminators() {
        assert_eq!(count_lines(Cursor::new("a\rb\rc\r")).unwrap(), 3);
        assert_eq!(count_lines(Cursor::new("a\r\nb\r\n")).unwrap(), 2);
        assert_eq!(count_lines(Cursor::new("a\r\rb\n\nc")).unwrap(), 5);
        assert_eq!(count_lines(Cursor::new("a\r")).unwrap(), 1);
    }

    #[test]
    fn test_count_lines_ignores_bad_utf8() {
        let data = vec![0xff, b'\n', 0xfe, 0xfd];
        assert_eq!(count_lines(Cursor::new(data)).unwrap(), 2);
    }

    #[test]
    fn test_split_terminators() {
        assert_eq!(split(b"a\rb\rc\r"), vec!["a", "b", "c"]);
        assert_eq!(split(b"a\r\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(split(b"a\r\r\nb"), vec!["a", "", "b"]);
        assert_eq!(split(b"\n"), vec![""]);
        assert!(split(b"").is_empty());
    }

    #[test]
    fn test_split_crlf_across_buffer_boundary() {
        // capacity 2 puts the \r and \n in separate fills
        let reader = BufReader::with_capacity(2, Cursor::new(b"a\r\nb".to_vec()));
        let lines: Vec<String> = UniversalLines::new(reader)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_count_crlf_agrees_with_split() {
        let data = b"one\r\ntwo\rthree\nfour";
        assert_eq!(count_lines(Cursor::new(data)).unwrap(), split(data).len());
    }

    #[test]
    fn test_split_invalid_utf8() {
        let mut lines = UniversalLines::new(Cursor::new(vec![0xff, b'\n']));
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}

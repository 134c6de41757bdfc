//! Lazy trace reader.
//!
//! Wraps any [`BufRead`] and yields one parsed event per non-blank line,
//! in file order. The reader is finite and not restartable; a parse or read
//! failure is yielded once and the caller decides whether to stop.
//!
//! Lines are decoded as UTF-8 with invalid bytes replaced by U+FFFD, so a
//! stray byte in an activity name is reported as an unknown activity rather
//! than a read failure.

use std::io::BufRead;
use std::path::PathBuf;

use super::event::{TraceEvent, parse_line};
use crate::common::{Result, SimError};

/// Iterator of parsed trace events over a line-oriented reader.
#[derive(Debug)]
pub struct TraceSource<R> {
    reader: R,
    /// Name used when reporting read failures.
    origin: PathBuf,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> TraceSource<R> {
    /// Creates a trace source reading from `reader`.
    ///
    /// # Arguments
    ///
    /// * `reader` - Line-oriented input holding the trace.
    /// * `origin` - Path or label reported in I/O errors.
    pub fn new(reader: R, origin: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            origin: origin.into(),
            line_no: 0,
            buf: Vec::new(),
        }
    }

    /// Number of lines consumed so far, blank lines included.
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceSource<R> {
    type Item = Result<TraceEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(SimError::Io {
                        path: self.origin.clone(),
                        source,
                    }));
                }
            }
            self.line_no += 1;

            let text = String::from_utf8_lossy(&self.buf);
            let line = text.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            let line_no = self.line_no;
            return Some(parse_line(line).map_err(|e| e.at_line(line_no)));
        }
    }
}

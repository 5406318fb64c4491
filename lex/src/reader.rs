use std::io::{self, BufRead};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Line

/// A logical line: comment stripped, trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    no: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(no: usize, raw: &str) -> Self {
        let code = match raw.split_once("//") {
            Some((code, _comment)) => code,
            None => raw,
        };
        Self {
            no,
            raw: raw.trim_end_matches(&['\r', '\n'][..]).to_string(),
            code: code.trim().to_string(),
        }
    }

    /// 1-based physical line number
    pub fn no(&self) -> usize {
        self.no
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn words(&self) -> std::str::SplitWhitespace<'_> {
        self.code.split_whitespace()
    }

    pub fn is_blank(&self) -> bool {
        self.code.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Reader

pub struct LineReader<R> {
    input: R,
    buf: Vec<u8>,
    no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: Vec::new(),
            no: 0,
        }
    }

    /// Next line carrying code, or `None` at end of stream.
    /// Blank and comment-only lines are skipped. Comments may hold any bytes;
    /// only the code before `//` has to be UTF-8.
    pub fn next_line(&mut self) -> Result<Option<Line>, Error> {
        loop {
            self.buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut self.buf)
                .map_err(|e| Error::FileRead(self.no + 1, e))?;
            if read == 0 {
                return Ok(None);
            }
            self.no += 1;

            let code = match self.buf.windows(2).position(|w| w == b"//") {
                Some(end) => &self.buf[..end],
                None => &self.buf[..],
            };
            if let Err(e) = std::str::from_utf8(code) {
                return Err(Error::FileRead(
                    self.no,
                    io::Error::new(io::ErrorKind::InvalidData, e),
                ));
            }

            let line = Line::new(self.no, &String::from_utf8_lossy(&self.buf));
            if !line.is_blank() {
                return Ok(Some(line));
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

//! Key Scanner
//!
//! Walks the lines that follow a content offset.

use std::io::BufRead;

use crate::config::ScanScope;
use crate::error::Result;

use super::LineKind;

/// One raw line and where it starts in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    /// File offset of the first byte
    pub offset: u64,

    /// Raw bytes, trailing newline included when present
    pub bytes: Vec<u8>,
}

impl ScannedLine {
    pub fn kind(&self) -> LineKind<'_> {
        LineKind::classify(&self.bytes)
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Offset one past the last byte
    pub fn end(&self) -> u64 {
        self.offset + self.len()
    }
}

/// A key line found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub line: ScannedLine,
    pub value: String,
}

/// Iterates lines from a content offset until the scope ends
///
/// With `ScanScope::Section` the first blank line or header stops the scan
/// and is not yielded. With `ScanScope::ToEndOfFile` every remaining line
/// is yielded. After the iterator is exhausted, `stop_offset()` is where
/// the scan ended: the boundary line's offset or EOF.
pub struct KeyScanner<R> {
    reader: R,
    scope: ScanScope,
    offset: u64,
    stopped: bool,
}

impl<R: BufRead> KeyScanner<R> {
    /// `reader` must be positioned at `start_offset` in the file
    pub fn new(reader: R, start_offset: u64, scope: ScanScope) -> Self {
        Self {
            reader,
            scope,
            offset: start_offset,
            stopped: false,
        }
    }

    /// Where the scan stopped (or has reached so far)
    pub fn stop_offset(&self) -> u64 {
        self.offset
    }

    fn next_line(&mut self) -> Result<Option<ScannedLine>> {
        if self.stopped {
            return Ok(None);
        }

        let mut bytes = Vec::new();
        let n = self.reader.read_until(b'\n', &mut bytes)?;
        if n == 0 {
            self.stopped = true;
            return Ok(None);
        }

        let line = ScannedLine {
            offset: self.offset,
            bytes,
        };

        if self.scope == ScanScope::Section && line.kind().is_boundary() {
            // Leave offset at the start of the boundary line
            self.stopped = true;
            return Ok(None);
        }

        self.offset = line.end();
        Ok(Some(line))
    }

    /// First key line named `key` within scope
    pub fn find_key(&mut self, key: &str) -> Result<Option<KeyMatch>> {
        while let Some(line) = self.next_line()? {
            let value = match line.kind() {
                LineKind::Entry { key: k, value } if k == key => value.to_string(),
                _ => continue,
            };
            tracing::trace!(key, offset = line.offset, "key matched");
            return Ok(Some(KeyMatch { line, value }));
        }
        Ok(None)
    }

    /// Drain the scope, returning every line named `key`
    pub fn find_all(&mut self, key: &str) -> Result<Vec<ScannedLine>> {
        let mut found = Vec::new();
        while let Some(line) = self.next_line()? {
            if line.kind().is_key(key) {
                found.push(line);
            }
        }
        Ok(found)
    }

    /// Drain the scope, returning all key/value pairs in order
    pub fn entries(&mut self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();
        while let Some(line) = self.next_line()? {
            if let LineKind::Entry { key, value } = line.kind() {
                pairs.push((key.to_string(), value.to_string()));
            }
        }
        Ok(pairs)
    }

    /// Drain the scope, returning the stop offset
    pub fn skip_to_end(&mut self) -> Result<u64> {
        while self.next_line()?.is_some() {}
        Ok(self.stop_offset())
    }
}

impl<R: BufRead> Iterator for KeyScanner<R> {
    type Item = Result<ScannedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}

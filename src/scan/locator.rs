//! Section Locator
//!
//! Finds the byte offset just past a section header line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

use super::LineKind;

/// Where a section header sits in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLocation {
    /// Offset of the first byte of the `[name]` line
    pub header_offset: u64,

    /// Offset immediately after the header line (start of the content region)
    pub content_offset: u64,
}

/// Scans a reader line by line from its current position
pub struct SectionLocator<R> {
    reader: R,
    offset: u64,
    line: Vec<u8>,
}

impl<R: BufRead> SectionLocator<R> {
    /// Wrap a reader positioned at byte 0
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            offset: 0,
            line: Vec::new(),
        }
    }

    /// Advance to the next header line, returning its name and location
    pub fn next_header(&mut self) -> Result<Option<(String, SectionLocation)>> {
        loop {
            self.line.clear();
            let n = self.reader.read_until(b'\n', &mut self.line)?;
            if n == 0 {
                return Ok(None);
            }

            let header_offset = self.offset;
            self.offset += n as u64;

            if let LineKind::Header(name) = LineKind::classify(&self.line) {
                let location = SectionLocation {
                    header_offset,
                    content_offset: self.offset,
                };
                return Ok(Some((name.to_string(), location)));
            }
        }
    }

    /// First header equal to `[name]` in file order
    pub fn find(&mut self, name: &str) -> Result<Option<SectionLocation>> {
        while let Some((found, location)) = self.next_header()? {
            if found == name {
                return Ok(Some(location));
            }
        }
        Ok(None)
    }
}

/// Locate `[name]` in the file at `path`
///
/// Returns `None` when no line matches before EOF.
pub fn locate_section(path: &Path, name: &str) -> Result<Option<SectionLocation>> {
    let file = File::open(path)?;
    let location = SectionLocator::new(BufReader::new(file)).find(name)?;

    match location {
        Some(loc) => tracing::trace!(
            section = name,
            content_offset = loc.content_offset,
            "section located"
        ),
        None => tracing::trace!(section = name, "section not found"),
    }

    Ok(location)
}

/// Every section header name in file order, duplicates included
pub fn list_sections(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut locator = SectionLocator::new(BufReader::new(file));

    let mut names = Vec::new();
    while let Some((name, _)) = locator.next_header()? {
        names.push(name);
    }
    Ok(names)
}

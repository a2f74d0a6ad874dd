//! In-Place Editor
//!
//! Positioned writes and truncation against the backing file.
//!
//! ## Responsibilities
//! - Create the backing file without clobbering an existing one
//! - Append at EOF
//! - Rewrite the tail of the file from an offset
//! - Truncate to a computed length, strictly after the rewrite lands
//!
//! Each `InPlaceEditor` owns one file handle for the span of a single
//! operation; the handle is released on drop, including on error paths.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::Result;

/// Create an empty file at `path` unless one already exists
///
/// Returns `true` when a new file was created.
pub fn create_if_missing(path: &Path) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Read/write handle over the backing file
pub struct InPlaceEditor {
    file: File,

    /// File length as last observed or written
    len: u64,
}

impl InPlaceEditor {
    /// Open an existing file for reading and writing
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let len = file.metadata()?.len();
        Ok(Self { file, len })
    }

    /// Current file length in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the last byte of the file is `\n` (false for an empty file)
    pub fn ends_with_newline(&mut self) -> Result<bool> {
        if self.len == 0 {
            return Ok(false);
        }
        let mut last = [0u8; 1];
        self.file.seek(SeekFrom::Start(self.len - 1))?;
        self.file.read_exact(&mut last)?;
        Ok(last[0] == b'\n')
    }

    /// Buffered reader positioned at `offset`
    ///
    /// Borrows the handle; the scan shares the editor's file position.
    pub fn reader_at(&mut self, offset: u64) -> Result<BufReader<&File>> {
        self.file.seek(SeekFrom::Start(offset))?;
        Ok(BufReader::new(&self.file))
    }

    /// Everything from `offset` to EOF
    pub fn read_tail(&mut self, offset: u64) -> Result<Vec<u8>> {
        let capacity = self.len.saturating_sub(offset) as usize;
        let mut buf = Vec::with_capacity(capacity);
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Positioned write; writing past EOF extends the file
    pub fn write_at(&mut self, offset: u64, bytes: &[u8]) -> Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(bytes)?;
        self.file.flush()?;
        self.len = self.len.max(offset + bytes.len() as u64);
        Ok(())
    }

    /// Write at the current end of file
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.len;
        tracing::trace!(offset = end, bytes = bytes.len(), "append");
        self.write_at(end, bytes)
    }

    /// Cut the file down to `new_len`
    pub fn truncate(&mut self, new_len: u64) -> Result<()> {
        self.file.set_len(new_len)?;
        self.len = new_len;
        Ok(())
    }

    /// Overwrite from `offset` with `content`, then truncate to `new_len`
    ///
    /// `new_len` must be at least `offset + content.len()`. The truncate
    /// only runs once the write has returned; if it fails the rewritten
    /// prefix stays on disk with stale bytes after it.
    pub fn rewrite_tail(&mut self, offset: u64, content: &[u8], new_len: u64) -> Result<()> {
        debug_assert!(new_len >= offset + content.len() as u64);

        self.write_at(offset, content)?;
        if new_len < self.len {
            self.truncate(new_len)?;
        }
        Ok(())
    }

    /// Insert `bytes` at `offset`, shifting everything after it
    pub fn insert_at(&mut self, offset: u64, bytes: &[u8]) -> Result<()> {
        let tail = self.read_tail(offset)?;
        let mut out = Vec::with_capacity(bytes.len() + tail.len());
        out.extend_from_slice(bytes);
        out.extend_from_slice(&tail);
        self.write_at(offset, &out)
    }

    /// Replace the `old_len` bytes at `offset` with `bytes`
    pub fn splice(&mut self, offset: u64, old_len: u64, bytes: &[u8]) -> Result<()> {
        let tail = self.read_tail(offset + old_len)?;
        let mut out = Vec::with_capacity(bytes.len() + tail.len());
        out.extend_from_slice(bytes);
        out.extend_from_slice(&tail);

        let new_len = offset + out.len() as u64;
        self.rewrite_tail(offset, &out, new_len)
    }
}

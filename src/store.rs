//! Store Module
//!
//! The key/value store over one backing file.
//!
//! ## Responsibilities
//! - Create the backing file on open
//! - Locate a section, then scan or rewrite from its content offset
//! - Route `Command`s to the matching operation
//!
//! No parsed copy of the file is kept between calls: every operation
//! rescans what it needs and opens (and drops) its own file handle.

use std::fs::File;
use std::io::{BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

use crate::command::{Command, Outcome};
use crate::config::{Config, DuplicateKeys, ScanScope};
use crate::editor::{self, InPlaceEditor};
use crate::error::{IniError, Result};
use crate::scan::line::{entry_line, header_line, validate_key, validate_section, validate_value};
use crate::scan::{self, KeyScanner, SectionLocation};

/// Persistent section/key store
///
/// ## Concurrency Model
/// None. Operations assume a single writer with sequential access; callers
/// sharing a file across threads or processes must serialize externally.
#[derive(Debug, Clone)]
pub struct Store {
    config: Config,
}

impl Store {
    /// Open or create a store at `path` with default config
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(Config::builder().path(path.as_ref()).build())
    }

    /// Open or create a store with the given config
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        if editor::create_if_missing(&config.path)? {
            tracing::debug!(path = %config.path.display(), "created empty store file");
        }

        Ok(Self { config })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::AddSection { section } => {
                self.add_section(&section)?;
                Ok(Outcome::Done)
            }
            Command::Write {
                section,
                key,
                value,
            } => {
                self.write_key(&section, &key, &value)?;
                Ok(Outcome::Done)
            }
            Command::Read { section, key } => self.read_key(&section, &key).map(Outcome::Value),
            Command::Delete { section, key } => {
                self.delete_key(&section, &key)?;
                Ok(Outcome::Done)
            }
            Command::Sections => self.sections().map(Outcome::Sections),
            Command::Entries { section } => self.entries(&section).map(Outcome::Entries),
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    fn locate(&self, section: &str) -> Result<Option<SectionLocation>> {
        scan::locate_section(&self.config.path, section)
    }

    fn require(&self, section: &str) -> Result<SectionLocation> {
        self.locate(section)?
            .ok_or_else(|| IniError::SectionNotExists(section.to_string()))
    }

    /// Append `\n[name]\n` to the file
    ///
    /// On an empty file the leading blank line is written unless
    /// `blank_line_before_first_section` is off.
    pub fn add_section(&self, name: &str) -> Result<()> {
        validate_section(name)?;

        if self.locate(name)?.is_some() {
            return Err(IniError::SectionExists(name.to_string()));
        }

        let mut editor = InPlaceEditor::open(&self.config.path)?;

        let mut out = if editor.is_empty() {
            if self.config.blank_line_before_first_section {
                "\n".to_string()
            } else {
                String::new()
            }
        } else {
            section_separator(&mut editor)?.to_string()
        };
        out.push_str(&header_line(name));

        editor.append(out.as_bytes())?;
        tracing::debug!(section = name, len = editor.len(), "section added");
        Ok(())
    }

    /// Whether a `[name]` header exists
    pub fn has_section(&self, name: &str) -> Result<bool> {
        Ok(self.locate(name)?.is_some())
    }

    /// All section names in file order
    pub fn sections(&self) -> Result<Vec<String>> {
        scan::list_sections(&self.config.path)
    }

    /// Key/value pairs in a section's content region, in file order
    pub fn entries(&self, section: &str) -> Result<Vec<(String, String)>> {
        let location = self.require(section)?;
        let reader = self.reader_at(location.content_offset)?;
        KeyScanner::new(reader, location.content_offset, ScanScope::Section).entries()
    }

    fn reader_at(&self, offset: u64) -> Result<BufReader<File>> {
        let mut file = File::open(&self.config.path)?;
        file.seek(SeekFrom::Start(offset))?;
        Ok(BufReader::new(file))
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// Write `key = value` into `section`
    ///
    /// A missing section is appended together with the key line. In an
    /// existing section the line goes at the end of the content region.
    /// With `DuplicateKeys::Append` an existing line for `key` is left in
    /// place and a second line is added.
    pub fn write_key(&self, section: &str, key: &str, value: &str) -> Result<()> {
        validate_section(section)?;
        validate_key(key)?;
        validate_value(value)?;

        let line = entry_line(key, value);

        let Some(location) = self.locate(section)? else {
            return self.append_section_with_key(section, &line);
        };

        let mut editor = InPlaceEditor::open(&self.config.path)?;

        if self.config.duplicate_keys == DuplicateKeys::Replace {
            let found = {
                let reader = editor.reader_at(location.content_offset)?;
                KeyScanner::new(reader, location.content_offset, ScanScope::Section)
                    .find_key(key)?
            };

            if let Some(found) = found {
                editor.splice(found.line.offset, found.line.len(), line.as_bytes())?;
                tracing::debug!(
                    section,
                    key,
                    offset = found.line.offset,
                    "key replaced"
                );
                return Ok(());
            }
        }

        let insert_at = {
            let reader = editor.reader_at(location.content_offset)?;
            KeyScanner::new(reader, location.content_offset, ScanScope::Section).skip_to_end()?
        };

        let mut bytes = Vec::with_capacity(line.len() + 1);
        if insert_at == editor.len() && !editor.is_empty() && !editor.ends_with_newline()? {
            bytes.push(b'\n');
        }
        bytes.extend_from_slice(line.as_bytes());

        editor.insert_at(insert_at, &bytes)?;
        tracing::debug!(
            section,
            key,
            offset = insert_at,
            len = editor.len(),
            "key inserted"
        );
        Ok(())
    }

    fn append_section_with_key(&self, section: &str, line: &str) -> Result<()> {
        let mut editor = InPlaceEditor::open(&self.config.path)?;

        let mut out = if editor.is_empty() {
            String::new()
        } else {
            section_separator(&mut editor)?.to_string()
        };
        out.push_str(&header_line(section));
        out.push_str(line);

        editor.append(out.as_bytes())?;
        tracing::debug!(section, len = editor.len(), "section added with key");
        Ok(())
    }

    /// Value of the first `key` line within the configured scan scope
    pub fn read_key(&self, section: &str, key: &str) -> Result<String> {
        validate_section(section)?;
        validate_key(key)?;

        let location = self.require(section)?;
        let reader = self.reader_at(location.content_offset)?;

        KeyScanner::new(reader, location.content_offset, self.config.scan_scope)
            .find_key(key)?
            .map(|found| found.value)
            .ok_or_else(|| IniError::key_not_exists(section, key))
    }

    /// Remove every `key` line within the configured scan scope
    ///
    /// The retained tail is written back at the content offset, then the
    /// file is truncated by the removed byte count. A missing key leaves
    /// the file untouched.
    pub fn delete_key(&self, section: &str, key: &str) -> Result<()> {
        validate_section(section)?;
        validate_key(key)?;

        let location = self.require(section)?;
        let offset = location.content_offset;

        let mut editor = InPlaceEditor::open(&self.config.path)?;
        let tail = editor.read_tail(offset)?;

        let doomed =
            KeyScanner::new(Cursor::new(&tail[..]), offset, self.config.scan_scope).find_all(key)?;
        if doomed.is_empty() {
            return Err(IniError::key_not_exists(section, key));
        }

        let mut retained = Vec::with_capacity(tail.len());
        let mut cursor = 0usize;
        let mut removed = 0u64;
        for line in &doomed {
            let start = (line.offset - offset) as usize;
            retained.extend_from_slice(&tail[cursor..start]);
            cursor = start + line.bytes.len();
            removed += line.len();
        }
        retained.extend_from_slice(&tail[cursor..]);

        let new_len = editor.len() - removed;
        editor.rewrite_tail(offset, &retained, new_len)?;

        tracing::debug!(
            section,
            key,
            lines = doomed.len(),
            removed,
            len = new_len,
            "key deleted"
        );
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Bytes to put before a header appended to a non-empty file
///
/// Always yields one blank line: `\n` after a terminated last line,
/// `\n\n` when the last line still needs its newline.
fn section_separator(editor: &mut InPlaceEditor) -> Result<&'static str> {
    if editor.ends_with_newline()? {
        Ok("\n")
    } else {
        Ok("\n\n")
    }
}

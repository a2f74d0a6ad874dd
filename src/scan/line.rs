//! Line classification and formatting
//!
//! Every line is handled as raw bytes; only lines that are valid UTF-8 can
//! be headers or key lines.

use crate::error::{IniError, NameKind, Result};

/// What a single raw line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming whitespace (including the newline)
    Blank,

    /// `[name]` after trimming; holds the text between the brackets
    Header(&'a str),

    /// `key = value`, split on the first `=`, both parts trimmed
    Entry { key: &'a str, value: &'a str },

    /// Anything else (no `=`, or not UTF-8)
    Other,
}

impl<'a> LineKind<'a> {
    /// Classify one raw line, with or without its trailing newline
    pub fn classify(raw: &'a [u8]) -> Self {
        let Ok(text) = std::str::from_utf8(raw) else {
            return LineKind::Other;
        };
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return LineKind::Blank;
        }

        if let Some(name) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return LineKind::Header(name);
        }

        match trimmed.split_once('=') {
            Some((key, value)) => LineKind::Entry {
                key: key.trim(),
                value: value.trim(),
            },
            None => LineKind::Other,
        }
    }

    /// Whether this line ends a section's content region
    pub fn is_boundary(&self) -> bool {
        matches!(self, LineKind::Blank | LineKind::Header(_))
    }

    /// Whether this is a key line for `key`
    pub fn is_key(&self, key: &str) -> bool {
        matches!(self, LineKind::Entry { key: k, .. } if *k == key)
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// `[name]\n`
pub fn header_line(name: &str) -> String {
    format!("[{}]\n", name)
}

/// `key = value\n`
pub fn entry_line(key: &str, value: &str) -> String {
    format!("{} = {}\n", key, value)
}

// =============================================================================
// Validation
// =============================================================================

fn invalid(kind: NameKind, name: &str, reason: &'static str) -> IniError {
    IniError::InvalidName {
        kind,
        name: name.to_string(),
        reason,
    }
}

fn has_newline(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

/// Section names must survive a round trip through `[name]`
pub fn validate_section(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(NameKind::Section, name, "must not be empty"));
    }
    if has_newline(name) {
        return Err(invalid(NameKind::Section, name, "must not contain a newline"));
    }
    if name.contains(']') {
        return Err(invalid(NameKind::Section, name, "must not contain ']'"));
    }
    Ok(())
}

/// Key names must survive a round trip through `key = value`
pub fn validate_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(invalid(NameKind::Key, key, "must not be empty"));
    }
    if has_newline(key) {
        return Err(invalid(NameKind::Key, key, "must not contain a newline"));
    }
    if key.contains('=') {
        return Err(invalid(NameKind::Key, key, "must not contain '='"));
    }
    if key.trim_start().starts_with('[') {
        return Err(invalid(NameKind::Key, key, "must not start with '['"));
    }
    if key.trim() != key {
        return Err(invalid(
            NameKind::Key,
            key,
            "must not start or end with whitespace",
        ));
    }
    Ok(())
}

/// Values are single-line; surrounding whitespace is lost on read
pub fn validate_value(value: &str) -> Result<()> {
    if has_newline(value) {
        return Err(invalid(NameKind::Value, value, "must not contain a newline"));
    }
    Ok(())
}

//! Error types for inistore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using IniError
pub type Result<T> = std::result::Result<T, IniError>;

/// Unified error type for inistore operations
#[derive(Debug, Error)]
pub enum IniError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Open, read, write, stat or truncate failed.
    ///
    /// When raised by a delete, the tail may already have been rewritten;
    /// the file can be left long with stale trailing bytes.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Section Errors
    // -------------------------------------------------------------------------
    #[error("Section already exists: [{0}]")]
    SectionExists(String),

    #[error("Section doesn't exist: [{0}]")]
    SectionNotExists(String),

    // -------------------------------------------------------------------------
    // Key Errors
    // -------------------------------------------------------------------------
    #[error("Key doesn't exist: {key} in [{section}]")]
    KeyNotExists { section: String, key: String },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid {kind} {name:?}: {reason}")]
    InvalidName {
        kind: NameKind,
        name: String,
        reason: &'static str,
    },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// What kind of input failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Section,
    Key,
    Value,
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameKind::Section => f.write_str("section name"),
            NameKind::Key => f.write_str("key name"),
            NameKind::Value => f.write_str("value"),
        }
    }
}

impl IniError {
    /// Shorthand for a missing key in a section
    pub fn key_not_exists(section: &str, key: &str) -> Self {
        IniError::KeyNotExists {
            section: section.to_string(),
            key: key.to_string(),
        }
    }
}

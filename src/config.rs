//! Configuration for inistore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{IniError, Result};

/// Main configuration for a Store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // File Configuration
    // -------------------------------------------------------------------------
    /// Backing file. Created empty on open if absent, never deleted.
    pub path: PathBuf,

    // -------------------------------------------------------------------------
    // Editing Policy
    // -------------------------------------------------------------------------
    /// What `write_key` does when the key is already in the section
    pub duplicate_keys: DuplicateKeys,

    /// How far `read_key` / `delete_key` look past the content offset
    pub scan_scope: ScanScope,

    /// Whether `add_section` on an empty file writes the leading blank line
    pub blank_line_before_first_section: bool,
}

/// Write policy for an already-present key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeys {
    /// Always insert a new `key = value` line at the end of the section.
    /// A repeated write leaves two lines with the same key name.
    #[default]
    Append,

    /// Overwrite the first same-named line inside the section
    Replace,
}

/// Lookup range for read and delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanScope {
    /// Stop at the first blank line, next section header, or EOF
    #[default]
    Section,

    /// Keep scanning to EOF, through any later sections
    ToEndOfFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./store.ini"),
            duplicate_keys: DuplicateKeys::Append,
            scan_scope: ScanScope::Section,
            blank_line_before_first_section: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config is usable
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(IniError::Config("path must not be empty".to_string()));
        }
        if self.path.is_dir() {
            return Err(IniError::Config(format!(
                "path is a directory: {}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the duplicate-key write policy
    pub fn duplicate_keys(mut self, policy: DuplicateKeys) -> Self {
        self.config.duplicate_keys = policy;
        self
    }

    /// Set the read/delete scan scope
    pub fn scan_scope(mut self, scope: ScanScope) -> Self {
        self.config.scan_scope = scope;
        self
    }

    /// Keep or suppress the blank line before a section added to an empty file
    pub fn blank_line_before_first_section(mut self, enabled: bool) -> Self {
        self.config.blank_line_before_first_section = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

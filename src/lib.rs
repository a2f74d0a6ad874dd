//! # inistore
//!
//! A small persistent key/value store backed by a plain-text file of
//! `[section]` headers and `key = value` lines.
//!
//! - No parsed copy of the file is held between calls
//! - Every operation locates its section, then edits the file in place
//! - Deletes rewrite the tail and truncate; inserts grow the file
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Store (add / write / read / delete)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │          SectionLocator (header line → content offset)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌───────────────┐
//!   │ KeyScanner  │          │ InPlaceEditor │
//!   │   (read)    │          │ (write/trunc) │
//!   └─────────────┘          └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use inistore::Store;
//!
//! let store = Store::open("app.ini")?;
//! store.write_key("db", "host", "localhost")?;
//! assert_eq!(store.read_key("db", "host")?, "localhost");
//! store.delete_key("db", "host")?;
//! # Ok::<(), inistore::IniError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod scan;
pub mod editor;
pub mod command;
pub mod store;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{IniError, Result};
pub use config::{Config, DuplicateKeys, ScanScope};
pub use command::{Command, Outcome};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of inistore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Scan Module
//!
//! Line-level readers over the backing file. Nothing here mutates the file.
//!
//! ## Responsibilities
//! - Classify raw lines (blank, section header, key line)
//! - Find the content offset of a section header (SectionLocator)
//! - Walk the lines after a content offset, matching key names (KeyScanner)
//!
//! ## Content Region
//! ```text
//! offset 0   ┌──────────────────────┐
//!            │ [db]\n               │  header line
//! content ──►├──────────────────────┤
//! offset     │ host = localhost\n   │  key lines
//!            │ port = 5432\n        │
//! boundary ─►├──────────────────────┤
//!            │ \n                   │  blank line, next header, or EOF
//!            │ [cache]\n            │
//!            └──────────────────────┘
//! ```

pub mod line;
mod locator;
mod scanner;

pub use line::LineKind;
pub use locator::{list_sections, locate_section, SectionLocation, SectionLocator};
pub use scanner::{KeyMatch, KeyScanner, ScannedLine};

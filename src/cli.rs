//! CLI front end
//!
//! Argument definitions and the glue between parsed arguments, a `Store`,
//! and the text printed for each `Outcome`. The `inistore-cli` binary only
//! installs logging and calls `run`.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::command::{Command, Outcome};
use crate::config::{Config, DuplicateKeys, ScanScope};
use crate::error::Result;
use crate::store::Store;

/// Exit status for a command that succeeded
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status for any error
pub const EXIT_FAILURE: u8 = 1;

/// inistore CLI
#[derive(Parser, Debug)]
#[command(name = "inistore-cli")]
#[command(about = "Edit sections and keys of an INI-style file in place")]
#[command(version)]
pub struct Args {
    /// Backing file (created if missing)
    #[arg(short, long, default_value = "./store.ini")]
    pub file: PathBuf,

    /// Overwrite an existing key instead of adding a second line
    #[arg(long)]
    pub replace: bool,

    /// Let get/del scan past the end of the section to EOF
    #[arg(long)]
    pub scan_to_eof: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add an empty section
    AddSection {
        /// The section name
        section: String,
    },

    /// Set a key in a section
    Set {
        /// The section name
        section: String,

        /// The key to set
        key: String,

        /// The value to set
        value: String,
    },

    /// Get a value by section and key
    Get {
        /// The section name
        section: String,

        /// The key to get
        key: String,
    },

    /// Delete a key
    Del {
        /// The section name
        section: String,

        /// The key to delete
        key: String,
    },

    /// List section names
    Sections,

    /// List the keys of a section
    List {
        /// The section name
        section: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::AddSection { section } => Command::AddSection { section },
            Commands::Set {
                section,
                key,
                value,
            } => Command::Write {
                section,
                key,
                value,
            },
            Commands::Get { section, key } => Command::Read { section, key },
            Commands::Del { section, key } => Command::Delete { section, key },
            Commands::Sections => Command::Sections,
            Commands::List { section } => Command::Entries { section },
        }
    }
}

impl Args {
    /// Store config selected by the flags
    pub fn config(&self) -> Config {
        let duplicate_keys = if self.replace {
            DuplicateKeys::Replace
        } else {
            DuplicateKeys::Append
        };
        let scan_scope = if self.scan_to_eof {
            ScanScope::ToEndOfFile
        } else {
            ScanScope::Section
        };

        Config::builder()
            .path(&self.file)
            .duplicate_keys(duplicate_keys)
            .scan_scope(scan_scope)
            .build()
    }
}

/// Print an outcome the way the CLI shows it on stdout
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Done => {}
        Outcome::Value(value) => writeln!(out, "{}", value)?,
        Outcome::Sections(names) => {
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Outcome::Entries(pairs) => {
            for (key, value) in pairs {
                writeln!(out, "{} = {}", key, value)?;
            }
        }
    }
    Ok(())
}

fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let store = Store::with_config(args.config())?;

    let command = Command::from(args.command);
    tracing::debug!(
        kind = ?command.command_type(),
        mutation = command.is_mutation(),
        "executing"
    );

    let outcome = store.execute(command)?;
    write_outcome(out, &outcome)
}

/// Run one CLI invocation, returning the process exit status
///
/// Errors are logged, never printed to `out`.
pub fn run<W: Write>(args: Args, out: &mut W) -> u8 {
    let file = args.file.clone();

    match execute(args, out) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{}: {}", file.display(), e);
            EXIT_FAILURE
        }
    }
}

//! Command definitions
//!
//! Requests a caller (such as the CLI) can route through `Store::execute`.

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    AddSection,
    Write,
    Read,
    Delete,
    Sections,
    Entries,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a new empty section
    AddSection { section: String },

    /// Write a key line into a section (creating the section if needed)
    Write {
        section: String,
        key: String,
        value: String,
    },

    /// Read a key's value
    Read { section: String, key: String },

    /// Delete a key line
    Delete { section: String, key: String },

    /// List section names
    Sections,

    /// List a section's key/value pairs
    Entries { section: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::AddSection { .. } => CommandType::AddSection,
            Command::Write { .. } => CommandType::Write,
            Command::Read { .. } => CommandType::Read,
            Command::Delete { .. } => CommandType::Delete,
            Command::Sections => CommandType::Sections,
            Command::Entries { .. } => CommandType::Entries,
        }
    }

    /// Whether executing this command can modify the file
    pub fn is_mutation(&self) -> bool {
        matches!(
            self.command_type(),
            CommandType::AddSection | CommandType::Write | CommandType::Delete
        )
    }
}

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Mutation applied, nothing to report
    Done,

    /// Value of a key
    Value(String),

    /// Section names in file order
    Sections(Vec<String>),

    /// Key/value pairs in file order
    Entries(Vec<(String, String)>),
}

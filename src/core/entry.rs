//! # Entries
//!
//! A single `(term, definition)` pair and the checks the selector runs
//! before an entry is allowed on screen.

use std::fmt;

/// Longest term the loader accepts, in characters.
pub const MAX_TERM_CHARS: usize = 80;

/// Shortest definition the selector will display, in characters.
pub const MIN_DEFINITION_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
}

/// Why an entry was refused for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidEntry {
    EmptyTerm,
    EmptyDefinition,
    /// Definition shorter than [`MIN_DEFINITION_CHARS`]; carries the actual length.
    DefinitionTooShort { len: usize },
}

impl fmt::Display for InvalidEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidEntry::EmptyTerm => write!(f, "empty term"),
            InvalidEntry::EmptyDefinition => write!(f, "empty definition"),
            InvalidEntry::DefinitionTooShort { len } => write!(
                f,
                "definition too short ({len} < {MIN_DEFINITION_CHARS} characters)"
            ),
        }
    }
}

impl std::error::Error for InvalidEntry {}

impl Entry {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Display-time check. Lengths count characters, not bytes.
    pub fn validate(&self) -> Result<(), InvalidEntry> {
        if self.term.is_empty() {
            return Err(InvalidEntry::EmptyTerm);
        }
        if self.definition.is_empty() {
            return Err(InvalidEntry::EmptyDefinition);
        }
        let len = self.definition.chars().count();
        if len < MIN_DEFINITION_CHARS {
            return Err(InvalidEntry::DefinitionTooShort { len });
        }
        Ok(())
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.term, self.definition)
    }
}

//! # Word Source
//!
//! Loads the word list: one `Term - Definition` pair per line.
//!
//! ```text
//! Apple - A fruit          → ("Apple", "A fruit")
//! Well-being - Health      → ("Well-being", "Health")    split on " - " first
//! Ennui-Listless boredom   → ("Ennui", "Listless boredom")  fallback: first '-'
//! Just a word              → skipped
//! ```
//!
//! The catalog is built once at startup and never mutated afterwards.

use log::{debug, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::entry::{Entry, MAX_TERM_CHARS};

const SEPARATOR: &str = " - ";
const FALLBACK_SEPARATOR: char = '-';

#[derive(Debug)]
pub enum CatalogError {
    /// The word list does not exist.
    NotFound(PathBuf),
    /// The word list exists but could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Parsing produced zero usable pairs. `None` for in-memory sources.
    NoValidEntries(Option<PathBuf>),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(path) => {
                write!(f, "words file not found: {}", path.display())
            }
            CatalogError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            CatalogError::NoValidEntries(Some(path)) => {
                write!(f, "no valid word/definition pairs found in {}", path.display())
            }
            CatalogError::NoValidEntries(None) => {
                write!(f, "no valid word/definition pairs found")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Ordered, non-empty list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Load and parse the word list at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        if !path.exists() {
            return Err(CatalogError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode_lossy(&bytes);

        let catalog = Self::parse(&text).map_err(|e| match e {
            CatalogError::NoValidEntries(None) => {
                CatalogError::NoValidEntries(Some(path.to_path_buf()))
            }
            other => other,
        })?;
        info!("Loaded {} entries from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse an in-memory word list.
    pub fn parse(text: &str) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        // '\r' alone also ends a line; the empty piece of "\r\n" is skipped below
        for line in text.split(['\n', '\r']) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Some(entry) => entries.push(entry),
                None => {
                    skipped += 1;
                    debug!("Skipping unparseable line: {:?}", line);
                }
            }
        }

        if skipped > 0 {
            debug!("Skipped {} of {} non-empty lines", skipped, skipped + entries.len());
        }
        Self::from_entries(entries)
    }

    /// Build a catalog from already-split entries. No per-entry validation is
    /// done here; the selector checks entries before showing them.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::NoValidEntries(None));
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Split one trimmed, non-empty line into an entry, or `None` if it has no
/// separator or fails the loader's checks.
fn parse_line(line: &str) -> Option<Entry> {
    let (term, definition) = line
        .split_once(SEPARATOR)
        .or_else(|| line.split_once(FALLBACK_SEPARATOR))?;

    let term = term.trim();
    let definition = definition.trim();

    if term.is_empty() || definition.is_empty() {
        return None;
    }
    if term.chars().count() > MAX_TERM_CHARS {
        return None;
    }
    Some(Entry::new(term, definition))
}

/// Best-effort UTF-8: invalid sequences are dropped and a leading BOM ignored.
fn decode_lossy(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

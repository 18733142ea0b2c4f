/*!
 * Append-only org-outline stores.
 *
 * A store is a plain text file holding a sequence of top-level entries
 * (`* heading` lines with nested `** ...` sections and body text). The
 * application only ever appends an entry at the end or cuts the entry that
 * currently ends the file.
 *
 * Undo is position based: it removes whatever top-level entry encloses the
 * end of the file, not necessarily the entry written by the last save. Manual
 * edits to a store between a save and an undo change what gets removed.
 */

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::file_utils::FileManager;

/// Maximum number of parent steps taken while looking for a top-level heading
pub const MAX_OUTLINE_DEPTH: usize = 100;

/// Heading line: one or more stars followed by a space, a tab or the line end
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*+)(?:[ \t](.*))?$").unwrap()
});

/// A heading line found in a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineHeading {
    /// Number of leading stars
    pub level: usize,
    /// Byte offset of the start of the heading line
    pub offset: usize,
    /// Heading text after the stars, tags included
    pub title: String,
}

/// Whether `line` would be read back as a heading
pub fn is_heading_line(line: &str) -> bool {
    HEADING_REGEX.is_match(line.trim_end_matches(['\n', '\r']))
}

/// Scan `content` for heading lines in document order
pub fn parse_headings(content: &str) -> Vec<OutlineHeading> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let text = line.trim_end_matches(['\n', '\r']);
        if let Some(caps) = HEADING_REGEX.captures(text) {
            headings.push(OutlineHeading {
                level: caps[1].len(),
                offset,
                title: caps.get(2).map_or("", |title| title.as_str()).trim().to_string(),
            });
        }
        offset += line.len();
    }

    headings
}

/// Find the top-level heading whose entry contains the end of the content
///
/// Starts from the heading owning the last non-blank text and walks up
/// through parents, at most [`MAX_OUTLINE_DEPTH`] steps. Returns `None` for
/// empty content, content without headings, or an outline whose last section
/// has no level-1 ancestor.
pub fn locate_last_entry(content: &str) -> Option<OutlineHeading> {
    let end_of_content = content.trim_end().len();
    if end_of_content == 0 {
        return None;
    }

    let headings: Vec<OutlineHeading> = parse_headings(content)
        .into_iter()
        .filter(|heading| heading.offset < end_of_content)
        .collect();

    let mut index = headings.len().checked_sub(1)?;
    let mut steps = 0;

    while headings[index].level > 1 {
        if steps == MAX_OUTLINE_DEPTH {
            return None;
        }
        let level = headings[index].level;
        index = headings[..index]
            .iter()
            .rposition(|heading| heading.level < level)?;
        steps += 1;
    }

    Some(headings[index].clone())
}

/// Split `content` into what remains and the last top-level entry
///
/// Returns `None` when there is no entry to cut.
pub fn cut_last_entry(content: &str) -> Option<(String, String)> {
    let entry = locate_last_entry(content)?;
    let (remaining, removed) = content.split_at(entry.offset);
    Some((remaining.to_string(), removed.to_string()))
}

/// The two stores written by a save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Vocabulary log
    Vocabulary,
    /// Flashcard deck
    Flashcards,
}

impl StoreKind {
    // @returns: Human readable store name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Flashcards => "flashcards",
        }
    }
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where an append landed, used to roll it back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendReceipt {
    /// File length before the append
    pub previous_len: u64,
    /// Whether the append created the file
    pub created: bool,
}

/// Result of an undo on one store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A top-level entry was cut
    Removed {
        /// Title of the removed entry's heading
        heading: String,
    },
    /// No enclosing top-level entry, store left as is
    NothingToRemove,
    /// The store could not be read or rewritten; it was left as is
    Failed(String),
}

/// A single org-outline store file
#[derive(Debug, Clone)]
pub struct OrgStore {
    kind: StoreKind,
    path: PathBuf,
}

impl OrgStore {
    /// Create a handle for the store at `path`
    pub fn new(kind: StoreKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current content, empty if the file does not exist yet
    pub fn read(&self) -> Result<String, StoreError> {
        FileManager::read_or_empty(&self.path).map_err(|e| StoreError::io(&self.path, e))
    }

    /// Append `text` at the end of the store, creating the file if absent
    ///
    /// A store that does not end with a newline gets one first, so the
    /// appended heading always starts its own line.
    pub fn append(&self, text: &str) -> Result<AppendReceipt, StoreError> {
        let created = !FileManager::file_exists(&self.path);
        let existing = if created { String::new() } else { self.read()? };

        let payload = if existing.is_empty() || existing.ends_with('\n') {
            text.to_string()
        } else {
            format!("\n{}", text)
        };

        let previous_len = match FileManager::append_to_file(&self.path, &payload) {
            Ok(len) => len,
            Err(e) => {
                if created && FileManager::file_exists(&self.path) {
                    let _ = std::fs::remove_file(&self.path);
                }
                return Err(StoreError::io(&self.path, e));
            }
        };

        debug!("Appended {} byte(s) to {} store {:?}", payload.len(), self.kind, self.path);

        Ok(AppendReceipt { previous_len, created })
    }

    /// Undo an append described by `receipt`
    pub fn rollback(&self, receipt: AppendReceipt) -> Result<(), StoreError> {
        if receipt.created {
            std::fs::remove_file(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        } else {
            FileManager::truncate_to(&self.path, receipt.previous_len)
                .map_err(|e| StoreError::io(&self.path, e))?;
        }
        warn!("Rolled back append to {} store {:?}", self.kind, self.path);
        Ok(())
    }

    /// Remove the top-level entry that currently ends the store
    ///
    /// Never fails: a missing file, a store without a top-level entry, or an
    /// I/O problem leaves the file untouched and is reported in the outcome.
    pub fn remove_last_entry(&self) -> UndoOutcome {
        if !FileManager::file_exists(&self.path) {
            debug!("{} store {:?} does not exist, nothing to undo", self.kind, self.path);
            return UndoOutcome::NothingToRemove;
        }

        let content = match self.read() {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read {} store: {}", self.kind, e);
                return UndoOutcome::Failed(e.to_string());
            }
        };

        let Some(entry) = locate_last_entry(&content) else {
            warn!("No top-level entry found in {} store {:?}", self.kind, self.path);
            return UndoOutcome::NothingToRemove;
        };

        if let Err(e) = FileManager::write_atomically(&self.path, &content[..entry.offset]) {
            let error = StoreError::io(&self.path, e);
            warn!("Could not rewrite {} store: {}", self.kind, error);
            return UndoOutcome::Failed(error.to_string());
        }

        info!("Removed '{}' from {} store", entry.title, self.kind);
        UndoOutcome::Removed { heading: entry.title }
    }
}

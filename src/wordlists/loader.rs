//! Word list loading and saving
//!
//! Vocabulary files are JSON arrays of records:
//!
//! ```json
//! [
//!   { "word": "abandon", "translations": [{ "translation": "to give up", "type": "v" }], "familiarity": 1 }
//! ]
//! ```
//!
//! Only the first translation is used as the meaning. A missing `familiarity`
//! means the word has not been learned.

use crate::core::{Familiarity, MISSING_MEANING, WordEntry};
use crate::store::VocabularyStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Failure to read or write a vocabulary file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("malformed word list {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("word list {} contains no words", .0.display())]
    Empty(PathBuf),

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot encode word list: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where a session's vocabulary came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabSource {
    File(PathBuf),
    /// The built-in list, with the reason the file could not be used
    Fallback { reason: String },
}

impl VocabSource {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

impl fmt::Display for VocabSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Fallback { reason } => write!(f, "built-in list ({reason})"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    word: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    translations: Vec<Translation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    familiarity: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Translation {
    translation: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
}

impl Record {
    fn into_entry(self) -> WordEntry {
        let meaning = self
            .translations
            .into_iter()
            .next()
            .map(|t| t.translation)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| MISSING_MEANING.to_string());

        let familiarity = match self.familiarity {
            None => Familiarity::Unfamiliar,
            Some(raw) => {
                let clamped = Familiarity::clamped(raw);
                if i64::from(clamped.value()) != raw {
                    warn!(word = %self.word, raw, "familiarity out of range, clamped to {clamped}");
                }
                clamped
            }
        };

        WordEntry::with_familiarity(self.word, meaning, familiarity)
    }

    fn from_entry(entry: &WordEntry) -> Self {
        Self {
            word: entry.term().to_string(),
            translations: vec![Translation {
                translation: entry.meaning().to_string(),
                kind: None,
            }],
            familiarity: Some(i64::from(entry.familiarity().value())),
        }
    }
}

/// Parse vocabulary JSON into entries
///
/// # Errors
///
/// Returns the JSON error if `content` is not an array of word records.
///
/// # Examples
/// ```
/// use vocab_trainer::wordlists::loader::parse_entries;
///
/// let entries = parse_entries(r#"[{"word": "able", "familiarity": 2}]"#).unwrap();
/// assert_eq!(entries[0].term(), "able");
/// assert!(entries[0].is_learned());
/// ```
pub fn parse_entries(content: &str) -> Result<Vec<WordEntry>, serde_json::Error> {
    let records: Vec<Record> = serde_json::from_str(content)?;
    Ok(records.into_iter().map(Record::into_entry).collect())
}

/// Load entries from a vocabulary file
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read, is not valid vocabulary
/// JSON, or holds no words.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<WordEntry>, StorageError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&content).map_err(|source| StorageError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    if entries.is_empty() {
        return Err(StorageError::Empty(path.to_path_buf()));
    }
    Ok(entries)
}

/// Load entries from `path`, or the built-in list if that fails
///
/// Never fails: an unavailable source is reported through the returned
/// `VocabSource` and a warning.
pub fn load_or_fallback<P: AsRef<Path>>(path: P) -> (Vec<WordEntry>, VocabSource) {
    let path = path.as_ref();
    match load_from_file(path) {
        Ok(entries) => {
            let learned = entries.iter().filter(|e| e.is_learned()).count();
            info!(
                path = %path.display(),
                total = entries.len(),
                learned,
                unlearned = entries.len() - learned,
                "loaded word list"
            );
            (entries, VocabSource::File(path.to_path_buf()))
        }
        Err(err) => {
            warn!("{err}; using built-in word list");
            (
                super::fallback_entries(),
                VocabSource::Fallback {
                    reason: err.to_string(),
                },
            )
        }
    }
}

/// Write every entry of `store` to `path` in the vocabulary JSON format
///
/// The file is written next to `path` first and then renamed over it.
///
/// # Errors
///
/// Returns `StorageError::Write` on I/O failure.
pub fn save_to_file<P: AsRef<Path>>(path: P, store: &VocabularyStore) -> Result<(), StorageError> {
    let path = path.as_ref();
    let records: Vec<Record> = store.iter().map(Record::from_entry).collect();
    let json = serde_json::to_string_pretty(&records)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let write_err = |source: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp_path, json).map_err(write_err)?;
    fs::rename(&tmp_path, path).map_err(write_err)?;

    info!(path = %path.display(), total = records.len(), "saved word list");
    Ok(())
}

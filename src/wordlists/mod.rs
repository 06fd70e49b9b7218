//! Word lists for the trainer
//!
//! Loads and saves vocabulary files and provides the built-in fallback list.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use loader::{StorageError, VocabSource, load_or_fallback};

use crate::core::WordEntry;

/// Built-in vocabulary as fresh, unlearned entries
#[must_use]
pub fn fallback_entries() -> Vec<WordEntry> {
    FALLBACK
        .iter()
        .map(|&(term, meaning)| WordEntry::new(term, meaning))
        .collect()
}

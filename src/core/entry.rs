//! Vocabulary entry representation
//!
//! A `WordEntry` pairs a term with its meaning and the learner's familiarity.

use std::fmt;

use super::Familiarity;

/// Meaning shown when the source data has none
pub const MISSING_MEANING: &str = "(no translation)";

/// A single vocabulary item with learning progress
///
/// The `learned` flag is kept alongside `familiarity` for quick lookups and is
/// only ever written together with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    term: String,
    meaning: String,
    familiarity: Familiarity,
    learned: bool,
}

impl WordEntry {
    /// Create an unfamiliar entry
    ///
    /// # Examples
    /// ```
    /// use vocab_trainer::core::{Familiarity, WordEntry};
    ///
    /// let entry = WordEntry::new("abandon", "to give up");
    /// assert_eq!(entry.term(), "abandon");
    /// assert_eq!(entry.familiarity(), Familiarity::Unfamiliar);
    /// assert!(!entry.is_learned());
    /// ```
    pub fn new(term: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self::with_familiarity(term, meaning, Familiarity::Unfamiliar)
    }

    /// Create an entry with existing progress
    pub fn with_familiarity(
        term: impl Into<String>,
        meaning: impl Into<String>,
        familiarity: Familiarity,
    ) -> Self {
        Self {
            term: term.into(),
            meaning: meaning.into(),
            familiarity,
            learned: familiarity.is_learned(),
        }
    }

    #[inline]
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[inline]
    #[must_use]
    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    #[inline]
    #[must_use]
    pub const fn familiarity(&self) -> Familiarity {
        self.familiarity
    }

    #[inline]
    #[must_use]
    pub const fn is_learned(&self) -> bool {
        self.learned
    }

    /// Set a new familiarity and recompute the learned flag
    ///
    /// Returns the learned flag from before the change.
    pub(crate) const fn set_familiarity(&mut self, familiarity: Familiarity) -> bool {
        let was_learned = self.learned;
        self.familiarity = familiarity;
        self.learned = familiarity.is_learned();
        was_learned
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.term, self.meaning)
    }
}

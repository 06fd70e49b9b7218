//! Learning session
//!
//! Bundles a vocabulary store with the random source used to draw from it.

use super::strategy::{Mode, SelectionPolicy};
use crate::core::{VocabError, WordEntry};
use crate::progress::{Transition, submit_familiarity};
use crate::store::{Status, VocabularyStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One learner's session over a vocabulary
///
/// Owns the store exclusively; every draw and update goes through here.
pub struct Session<R: Rng> {
    store: VocabularyStore,
    rng: R,
}

impl Session<StdRng> {
    /// Session with a fixed seed, for reproducible draws
    #[must_use]
    pub fn seeded(entries: Vec<WordEntry>, seed: u64) -> Self {
        Self::new(VocabularyStore::new(entries), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    pub const fn new(store: VocabularyStore, rng: R) -> Self {
        Self { store, rng }
    }

    /// Draw the next word index for `mode`
    ///
    /// Returns `None` when the pool for that mode is empty.
    pub fn next_word(&mut self, mode: Mode) -> Option<usize> {
        mode.select(&self.store, &mut self.rng)
    }

    /// Record a familiarity rating for `index`
    ///
    /// # Errors
    /// Propagates `VocabError` from the update; the store is unchanged on error.
    pub fn submit(&mut self, index: usize, rating: u8) -> Result<Transition, VocabError> {
        submit_familiarity(&mut self.store, index, rating)
    }

    /// Entry at `index`
    ///
    /// # Errors
    /// Returns `VocabError::IndexOutOfRange` for an unknown index.
    pub fn entry(&self, index: usize) -> Result<&WordEntry, VocabError> {
        self.store.get(index)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.store.status()
    }

    #[inline]
    pub const fn store(&self) -> &VocabularyStore {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> VocabularyStore {
        self.store
    }
}

//! Vocabulary store
//!
//! Owns the word entries and keeps their indices split into an unlearned and
//! a learned pool. Indices are stable for the lifetime of the store.

mod partition;

use crate::core::{Familiarity, VocabError, WordEntry};
use partition::Partition;

/// Counts shown in status displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    pub total: usize,
    pub learned: usize,
    pub unlearned: usize,
}

/// Authoritative set of entries plus the learned/unlearned index pools
///
/// Every index in `0..count()` is in exactly one pool, and it is in the
/// learned pool iff its entry is learned.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    entries: Vec<WordEntry>,
    pools: Partition,
}

impl VocabularyStore {
    /// Build a store from an initial snapshot
    ///
    /// # Examples
    /// ```
    /// use vocab_trainer::core::{Familiarity, WordEntry};
    /// use vocab_trainer::store::VocabularyStore;
    ///
    /// let store = VocabularyStore::new(vec![
    ///     WordEntry::new("apple", "a fruit"),
    ///     WordEntry::with_familiarity("dog", "an animal", Familiarity::Familiar),
    /// ]);
    /// assert_eq!(store.count(), 2);
    /// assert_eq!(store.learned_count(), 1);
    /// ```
    #[must_use]
    pub fn new(entries: Vec<WordEntry>) -> Self {
        let mut store = Self::default();
        store.load(entries);
        store
    }

    /// Replace all state with `entries`
    ///
    /// An empty snapshot is accepted; callers decide whether that is an error.
    pub fn load(&mut self, entries: Vec<WordEntry>) {
        self.pools = Partition::from_flags(entries.iter().map(WordEntry::is_learned));
        self.entries = entries;
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn learned_count(&self) -> usize {
        self.pools.learned().len()
    }

    #[inline]
    #[must_use]
    pub fn unlearned_count(&self) -> usize {
        self.pools.unlearned().len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the three counts
    #[must_use]
    pub fn status(&self) -> Status {
        Status {
            total: self.count(),
            learned: self.learned_count(),
            unlearned: self.unlearned_count(),
        }
    }

    /// Number of entries at each familiarity tier, indexed by tier value
    #[must_use]
    pub fn tier_counts(&self) -> [usize; 3] {
        let mut counts = [0; 3];
        for entry in &self.entries {
            counts[usize::from(entry.familiarity().value())] += 1;
        }
        counts
    }

    /// Entry at `index`
    ///
    /// # Errors
    /// Returns `VocabError::IndexOutOfRange` if `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&WordEntry, VocabError> {
        self.entries.get(index).ok_or(VocabError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// All entries in index order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    /// Indices of entries at familiarity 0
    #[inline]
    #[must_use]
    pub fn unlearned_indices(&self) -> &[usize] {
        self.pools.unlearned()
    }

    /// Indices of entries at familiarity 1 or 2
    #[inline]
    #[must_use]
    pub fn learned_indices(&self) -> &[usize] {
        self.pools.learned()
    }

    /// Set the familiarity of `index`, moving it between pools when its
    /// learned state flips
    ///
    /// Returns the learned flag from before the change. The caller has already
    /// validated `index`.
    pub(crate) fn apply_familiarity(&mut self, index: usize, familiarity: Familiarity) -> bool {
        let was_learned = self.entries[index].set_familiarity(familiarity);
        let learned = familiarity.is_learned();
        if was_learned != learned {
            self.pools.reassign(index, learned);
        }
        was_learned
    }

    /// Check the pool invariants against the entries
    ///
    /// Linear in the store size; meant for assertions and tests.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.pools.len() == self.entries.len()
            && self.pools.is_valid()
            && self
                .entries
                .iter()
                .enumerate()
                .all(|(i, entry)| {
                    entry.is_learned() == entry.familiarity().is_learned()
                        && self.pools.is_learned(i) == entry.is_learned()
                })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<WordEntry> {
        vec![
            WordEntry::new("abandon", "to give up"),
            WordEntry::with_familiarity("ability", "skill", Familiarity::Moderate),
            WordEntry::new("able", "capable"),
            WordEntry::with_familiarity("apple", "a fruit", Familiarity::Familiar),
        ]
    }

    #[test]
    fn load_partitions_by_familiarity() {
        let store = VocabularyStore::new(sample_entries());

        assert_eq!(store.count(), 4);
        assert_eq!(store.unlearned_count(), 2);
        assert_eq!(store.learned_count(), 2);
        assert_eq!(store.unlearned_indices(), &[0, 2]);
        assert_eq!(store.learned_indices(), &[1, 3]);
        assert!(store.is_consistent());
    }

    #[test]
    fn load_replaces_previous_state() {
        let mut store = VocabularyStore::new(sample_entries());
        store.load(vec![WordEntry::new("dog", "an animal")]);

        assert_eq!(store.count(), 1);
        assert_eq!(store.unlearned_indices(), &[0]);
        assert!(store.learned_indices().is_empty());
        assert!(store.is_consistent());
    }

    #[test]
    fn empty_store_is_accepted() {
        let store = VocabularyStore::new(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.status(), Status::default());
        assert!(store.is_consistent());
    }

    #[test]
    fn get_in_range() {
        let store = VocabularyStore::new(sample_entries());
        assert_eq!(store.get(2).unwrap().term(), "able");
    }

    #[test]
    fn get_out_of_range() {
        let store = VocabularyStore::new(sample_entries());
        assert_eq!(
            store.get(4),
            Err(VocabError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn duplicate_terms_are_distinct_entries() {
        let store = VocabularyStore::new(vec![
            WordEntry::new("dog", "an animal"),
            WordEntry::with_familiarity("dog", "an animal", Familiarity::Moderate),
        ]);
        assert_eq!(store.unlearned_indices(), &[0]);
        assert_eq!(store.learned_indices(), &[1]);
    }

    #[test]
    fn tier_counts_sum_to_total() {
        let store = VocabularyStore::new(sample_entries());
        let tiers = store.tier_counts();
        assert_eq!(tiers, [2, 1, 1]);
        assert_eq!(tiers.iter().sum::<usize>(), store.count());
    }

    #[test]
    fn apply_familiarity_moves_between_pools() {
        let mut store = VocabularyStore::new(sample_entries());

        let was = store.apply_familiarity(0, Familiarity::Familiar);
        assert!(!was);
        assert!(store.learned_indices().contains(&0));
        assert!(!store.unlearned_indices().contains(&0));

        let was = store.apply_familiarity(3, Familiarity::Unfamiliar);
        assert!(was);
        assert!(store.unlearned_indices().contains(&3));
        assert!(!store.learned_indices().contains(&3));

        assert!(store.is_consistent());
    }
}

//! Word selection policies
//!
//! Defines the `SelectionPolicy` trait and the two modes a session can draw in.

use crate::core::WordEntry;
use crate::store::VocabularyStore;
use rand::Rng;

/// A policy for picking the next word to show
///
/// Each candidate index is drawn with probability proportional to its weight.
pub trait SelectionPolicy {
    /// The pool this policy draws from
    fn candidates<'a>(&self, store: &'a VocabularyStore) -> &'a [usize];

    /// Integer weight of one candidate
    fn weight(&self, entry: &WordEntry) -> u32;

    /// Pick the next index, or `None` when the pool is empty
    ///
    /// A single uniform draw in `[0, total_weight)` is walked through the
    /// cumulative weights, which gives exactly the weighted distribution
    /// without building a repeated-index pool.
    fn select<R: Rng + ?Sized>(&self, store: &VocabularyStore, rng: &mut R) -> Option<usize> {
        let candidates = self.candidates(store);
        let total: u32 = candidates
            .iter()
            .map(|&index| self.weight(&store.entries()[index]))
            .sum();
        if total == 0 {
            return None;
        }

        let mut ticket = rng.random_range(0..total);
        for &index in candidates {
            let weight = self.weight(&store.entries()[index]);
            if ticket < weight {
                return Some(index);
            }
            ticket -= weight;
        }
        None
    }

    /// Exact selection probability of every candidate, in pool order
    fn probabilities(&self, store: &VocabularyStore) -> Vec<(usize, f64)> {
        let candidates = self.candidates(store);
        let weights: Vec<u32> = candidates
            .iter()
            .map(|&index| self.weight(&store.entries()[index]))
            .collect();
        let total = f64::from(weights.iter().sum::<u32>());
        if total == 0.0 {
            return Vec::new();
        }

        candidates
            .iter()
            .zip(weights)
            .map(|(&index, weight)| (index, f64::from(weight) / total))
            .collect()
    }
}

/// Uniform draw from the unlearned pool
pub struct NewWordPolicy;

impl SelectionPolicy for NewWordPolicy {
    fn candidates<'a>(&self, store: &'a VocabularyStore) -> &'a [usize] {
        store.unlearned_indices()
    }

    fn weight(&self, _entry: &WordEntry) -> u32 {
        1
    }

    fn select<R: Rng + ?Sized>(&self, store: &VocabularyStore, rng: &mut R) -> Option<usize> {
        let pool = store.unlearned_indices();
        if pool.is_empty() {
            None
        } else {
            Some(pool[rng.random_range(0..pool.len())])
        }
    }
}

/// Familiarity-weighted draw from the learned pool
///
/// Weight is `3 - familiarity`, so moderate words come back twice as often as
/// familiar ones.
pub struct ReviewPolicy;

impl SelectionPolicy for ReviewPolicy {
    fn candidates<'a>(&self, store: &'a VocabularyStore) -> &'a [usize] {
        store.learned_indices()
    }

    fn weight(&self, entry: &WordEntry) -> u32 {
        entry.familiarity().review_weight()
    }
}

/// Which pool the learner is working through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Learn words not seen yet
    NewWord,
    /// Review learned words, weakest first
    Review,
}

impl Mode {
    /// Parse a mode name
    ///
    /// Supported names: "new", "learn", "new-word", "review"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "new" | "learn" | "new-word" => Some(Self::NewWord),
            "review" => Some(Self::Review),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewWord => "Learn",
            Self::Review => "Review",
        }
    }

    /// Message shown when the pool for this mode is empty
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::NewWord => "No new words to learn",
            Self::Review => "No words to review",
        }
    }
}

impl SelectionPolicy for Mode {
    fn candidates<'a>(&self, store: &'a VocabularyStore) -> &'a [usize] {
        match self {
            Self::NewWord => NewWordPolicy.candidates(store),
            Self::Review => ReviewPolicy.candidates(store),
        }
    }

    fn weight(&self, entry: &WordEntry) -> u32 {
        match self {
            Self::NewWord => NewWordPolicy.weight(entry),
            Self::Review => ReviewPolicy.weight(entry),
        }
    }

    fn select<R: Rng + ?Sized>(&self, store: &VocabularyStore, rng: &mut R) -> Option<usize> {
        match self {
            Self::NewWord => NewWordPolicy.select(store, rng),
            Self::Review => ReviewPolicy.select(store, rng),
        }
    }
}

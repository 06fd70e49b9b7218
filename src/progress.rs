//! Progress updates
//!
//! Applies a learner's familiarity rating to one entry and keeps the store's
//! pools in step with it.

use crate::core::{Familiarity, VocabError};
use crate::store::VocabularyStore;
use tracing::debug;

/// How a rating changed an entry's pool membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved from the unlearned pool to the learned pool
    Learned,
    /// Moved from the learned pool back to the unlearned pool
    Forgotten,
    /// Stayed in its pool (tier may still have changed, e.g. 1 -> 2)
    Unchanged,
}

/// Record a new familiarity rating for the entry at `index`
///
/// Does not pick the next word; callers ask a selection policy for that.
///
/// # Errors
/// - `VocabError::IndexOutOfRange` if `index` is not in the store
/// - `VocabError::InvalidFamiliarity` if `rating` is not 0, 1 or 2
///
/// The store is untouched on error.
///
/// # Examples
/// ```
/// use vocab_trainer::core::WordEntry;
/// use vocab_trainer::progress::{Transition, submit_familiarity};
/// use vocab_trainer::store::VocabularyStore;
///
/// let mut store = VocabularyStore::new(vec![WordEntry::new("apple", "a fruit")]);
/// assert_eq!(submit_familiarity(&mut store, 0, 2), Ok(Transition::Learned));
/// assert_eq!(store.learned_count(), 1);
/// ```
pub fn submit_familiarity(
    store: &mut VocabularyStore,
    index: usize,
    rating: u8,
) -> Result<Transition, VocabError> {
    let familiarity = Familiarity::try_from(rating)?;
    store.get(index)?;

    let was_learned = store.apply_familiarity(index, familiarity);
    let transition = match (was_learned, familiarity.is_learned()) {
        (false, true) => Transition::Learned,
        (true, false) => Transition::Forgotten,
        _ => Transition::Unchanged,
    };

    debug!(index, rating, ?transition, "familiarity submitted");
    debug_assert!(store.is_consistent());
    Ok(transition)
}

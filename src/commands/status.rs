//! Status command
//!
//! Summarizes learning progress for a loaded vocabulary.

use crate::store::{Status, VocabularyStore};
use crate::wordlists::VocabSource;

/// Progress summary of a store
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub source: VocabSource,
    pub status: Status,
    /// Entry counts per familiarity tier (0, 1, 2)
    pub tiers: [usize; 3],
}

impl StatusReport {
    /// Share of words learned, in percent
    #[must_use]
    pub fn learned_percent(&self) -> f64 {
        if self.status.total == 0 {
            0.0
        } else {
            self.status.learned as f64 / self.status.total as f64 * 100.0
        }
    }
}

#[must_use]
pub fn status_report(store: &VocabularyStore, source: VocabSource) -> StatusReport {
    StatusReport {
        source,
        status: store.status(),
        tiers: store.tier_counts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Familiarity, WordEntry};
    use std::path::PathBuf;

    #[test]
    fn report_counts() {
        let store = VocabularyStore::new(vec![
            WordEntry::new("apple", "a fruit"),
            WordEntry::with_familiarity("banana", "a fruit", Familiarity::Moderate),
            WordEntry::with_familiarity("cherry", "a fruit", Familiarity::Familiar),
            WordEntry::with_familiarity("dog", "an animal", Familiarity::Familiar),
        ]);
        let report = status_report(&store, VocabSource::File(PathBuf::from("words.json")));

        assert_eq!(report.status.total, 4);
        assert_eq!(report.status.learned, 3);
        assert_eq!(report.status.unlearned, 1);
        assert_eq!(report.tiers, [1, 1, 2]);
        assert!((report.learned_percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn empty_store_percent() {
        let store = VocabularyStore::new(Vec::new());
        let report = status_report(
            &store,
            VocabSource::Fallback {
                reason: "missing".to_string(),
            },
        );
        assert!(report.learned_percent().abs() < f64::EPSILON);
    }
}

//! Simulate command
//!
//! Draws many selections from a fixed store and compares the observed
//! frequencies with the exact selection probabilities.

use crate::core::Familiarity;
use crate::selection::{Mode, SelectionPolicy};
use crate::store::VocabularyStore;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Draws per worker chunk; each chunk gets its own seeded generator
const CHUNK_SIZE: usize = 10_000;

/// Observed vs expected frequency for one word
#[derive(Debug, Clone)]
pub struct SimulationRow {
    pub index: usize,
    pub term: String,
    pub familiarity: Familiarity,
    pub observed: usize,
    pub expected: f64,
}

impl SimulationRow {
    /// Fraction of all draws that picked this word
    #[must_use]
    pub fn frequency(&self, draws: usize) -> f64 {
        if draws == 0 {
            0.0
        } else {
            self.observed as f64 / draws as f64
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub mode: Mode,
    pub draws: usize,
    pub rows: Vec<SimulationRow>,
    pub duration: Duration,
}

impl SimulationResult {
    /// Largest gap between observed frequency and exact probability
    #[must_use]
    pub fn max_deviation(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| (row.frequency(self.draws) - row.expected).abs())
            .fold(0.0, f64::max)
    }
}

/// Draw `draws` selections in `mode` without touching the store
///
/// Work is split into chunks run in parallel; chunk `k` uses a generator
/// seeded with `seed + k`, so the tallies depend only on `seed`.
/// Returns no rows and zero draws when the pool for `mode` is empty.
pub fn run_simulation(
    store: &VocabularyStore,
    mode: Mode,
    draws: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let start = Instant::now();
    let probabilities = mode.probabilities(store);
    if probabilities.is_empty() {
        return SimulationResult {
            mode,
            draws: 0,
            rows: Vec::new(),
            duration: start.elapsed(),
        };
    }

    let pb = if show_progress {
        let pb = ProgressBar::new(draws as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let chunks = draws.div_ceil(CHUNK_SIZE);
    let tally = (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
            let size = CHUNK_SIZE.min(draws - chunk * CHUNK_SIZE);
            let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
            for _ in 0..size {
                if let Some(index) = mode.select(store, &mut rng) {
                    *counts.entry(index).or_insert(0) += 1;
                }
            }
            pb.inc(size as u64);
            counts
        })
        .reduce(FxHashMap::default, |mut acc, counts| {
            for (index, count) in counts {
                *acc.entry(index).or_insert(0) += count;
            }
            acc
        });

    pb.finish_with_message("Complete!");
    debug!(draws, chunks, distinct = tally.len(), "simulation finished");

    let mut rows: Vec<SimulationRow> = probabilities
        .into_iter()
        .filter_map(|(index, expected)| {
            let entry = store.get(index).ok()?;
            Some(SimulationRow {
                index,
                term: entry.term().to_string(),
                familiarity: entry.familiarity(),
                observed: tally.get(&index).copied().unwrap_or(0),
                expected,
            })
        })
        .collect();
    rows.sort_by_key(|row| row.index);

    SimulationResult {
        mode,
        draws,
        rows,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    fn setup_store() -> VocabularyStore {
        VocabularyStore::new(vec![
            WordEntry::new("apple", "a fruit"),
            WordEntry::with_familiarity("banana", "a fruit", Familiarity::Moderate),
            WordEntry::with_familiarity("cherry", "a fruit", Familiarity::Moderate),
            WordEntry::with_familiarity("dog", "an animal", Familiarity::Familiar),
            WordEntry::new("elephant", "an animal"),
        ])
    }

    #[test]
    fn observed_counts_sum_to_draws() {
        let store = setup_store();
        let result = run_simulation(&store, Mode::Review, 25_000, 9, false);

        assert_eq!(result.draws, 25_000);
        assert_eq!(result.rows.len(), 3);
        let total: usize = result.rows.iter().map(|r| r.observed).sum();
        assert_eq!(total, 25_000);
    }

    #[test]
    fn review_simulation_matches_weights() {
        let store = setup_store();
        let result = run_simulation(&store, Mode::Review, 40_000, 21, false);

        let expected: Vec<(usize, f64)> =
            result.rows.iter().map(|r| (r.index, r.expected)).collect();
        assert_eq!(expected, vec![(1, 0.4), (2, 0.4), (3, 0.2)]);
        assert!(result.max_deviation() < 0.015);
    }

    #[test]
    fn new_word_simulation_is_uniform() {
        let store = setup_store();
        let result = run_simulation(&store, Mode::NewWord, 20_000, 4, false);

        let indices: Vec<usize> = result.rows.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 4]);
        assert!(result.max_deviation() < 0.015);
    }

    #[test]
    fn same_seed_same_tally() {
        let store = setup_store();
        let first = run_simulation(&store, Mode::Review, 15_000, 77, false);
        let second = run_simulation(&store, Mode::Review, 15_000, 77, false);

        let a: Vec<usize> = first.rows.iter().map(|r| r.observed).collect();
        let b: Vec<usize> = second.rows.iter().map(|r| r.observed).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_pool_yields_no_rows() {
        let store = VocabularyStore::new(vec![WordEntry::new("apple", "a fruit")]);
        let result = run_simulation(&store, Mode::Review, 1_000, 0, false);

        assert_eq!(result.draws, 0);
        assert!(result.rows.is_empty());
        assert!(result.max_deviation().abs() < f64::EPSILON);
    }

    #[test]
    fn simulation_does_not_mutate_store() {
        let store = setup_store();
        let before = store.status();
        run_simulation(&store, Mode::NewWord, 5_000, 1, false);
        assert_eq!(store.status(), before);
    }
}

//! Formatting utilities for terminal output

use crate::core::{Familiarity, WordEntry};
use crate::progress::Transition;
use crate::store::Status;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One-line summary of the three store counts
#[must_use]
pub fn status_line(status: &Status) -> String {
    format!(
        "Total: {}   Learned: {}   Unlearned: {}",
        status.total, status.learned, status.unlearned
    )
}

/// Dots showing a familiarity tier, e.g. `●○`
#[must_use]
pub fn familiarity_dots(familiarity: Familiarity) -> String {
    let filled = usize::from(familiarity.value());
    format!("{}{}", "●".repeat(filled), "○".repeat(2 - filled))
}

/// Message describing the outcome of a rating
#[must_use]
pub fn describe_transition(entry: &WordEntry, transition: Transition) -> String {
    match transition {
        Transition::Learned => format!(
            "'{}' learned ({})",
            entry.term(),
            entry.familiarity()
        ),
        Transition::Forgotten => format!("'{}' moved back to new words", entry.term()),
        Transition::Unchanged => format!("'{}' marked {}", entry.term(), entry.familiarity()),
    }
}

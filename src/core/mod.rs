//! Core domain types for vocabulary training
//!
//! Entries, familiarity tiers and the errors the store can raise. Nothing here
//! touches I/O or randomness.

mod entry;
mod error;
mod familiarity;

pub use entry::{MISSING_MEANING, WordEntry};
pub use error::VocabError;
pub use familiarity::Familiarity;

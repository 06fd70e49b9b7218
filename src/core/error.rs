//! Errors raised by the vocabulary core

use thiserror::Error;

/// Rejected request against a vocabulary store
///
/// Neither variant leaves the store modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabError {
    #[error("word index {index} is out of range (store holds {len} words)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("familiarity must be 0, 1 or 2, got {0}")]
    InvalidFamiliarity(u8),
}

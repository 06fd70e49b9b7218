//! Vocabulary Trainer
//!
//! A flashcard engine that splits a vocabulary into learned and unlearned
//! pools, draws new words uniformly and reviews learned words weighted toward
//! the weaker ones.
//!
//! # Quick Start
//!
//! ```rust
//! use vocab_trainer::core::WordEntry;
//! use vocab_trainer::selection::{Mode, Session};
//!
//! let mut session = Session::seeded(
//!     vec![WordEntry::new("apple", "a fruit"), WordEntry::new("dog", "an animal")],
//!     42,
//! );
//!
//! let index = session.next_word(Mode::NewWord).unwrap();
//! session.submit(index, 2).unwrap();
//! assert_eq!(session.status().learned, 1);
//! assert_eq!(session.next_word(Mode::Review), Some(index));
//! ```

// Core domain types
pub mod core;

// Entries and their learned/unlearned pools
pub mod store;

// Familiarity updates
pub mod progress;

// Next-word selection
pub mod selection;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

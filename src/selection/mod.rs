//! Choosing the next word
//!
//! New words are drawn uniformly from the unlearned pool; review draws from
//! the learned pool weighted toward weaker words.

mod session;
pub mod strategy;

pub use session::Session;
pub use strategy::{Mode, NewWordPolicy, ReviewPolicy, SelectionPolicy};

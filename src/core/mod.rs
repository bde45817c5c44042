//! Core domain types for Wordle
//!
//! Words, feedback hints and the memoizing engine that computes them.
//! Nothing in here does I/O.

mod engine;
mod hint;
mod word;

pub use engine::{CacheStats, HintEngine};
pub use hint::{Hint, Mark, ParseHintError};
pub use word::{WORD_LEN, Word, WordError, WordSet, is_valid_word};

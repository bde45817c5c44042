//! Word lists for Wordle solving
//!
//! The guess universe comes from a dictionary file and the remaining targets
//! from standard input; both pass through the same validating loader.

pub mod loader;

pub use loader::{DEFAULT_DICTIONARY, WordListError, load_from_file, read_words};

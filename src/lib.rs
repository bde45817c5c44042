//! Wordle Next Guess
//!
//! Ranks candidate Wordle guesses by how well they split the words that are
//! still possible: mean partition-cell size and worst-case cell size.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_next_guess::analysis::{Rankings, analyze, build_partitions};
//! use wordle_next_guess::core::HintEngine;
//! use wordle_next_guess::wordlists::loader::words_from_slice;
//!
//! let guesses = words_from_slice(&["crane", "slate", "zzzzz"]);
//! let targets = words_from_slice(&["crate", "grate", "slate"]);
//!
//! let mut engine = HintEngine::new();
//! let partitions = build_partitions(&mut engine, &guesses, &targets);
//! let rankings = Rankings::compute(&analyze(&partitions), &targets, 10);
//!
//! assert_eq!(rankings.best_max[0].maximum, 1);
//! ```

// Core domain types
pub mod core;

// Partitioning, scoring and ranking
pub mod analysis;

// Word lists
pub mod wordlists;

// Known-answer checks
pub mod selfcheck;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

//! Command implementations

pub mod best_guess;

pub use best_guess::{BestGuessConfig, BestGuessResult, find_best_guess};

//! Guess analysis
//!
//! Partitions the remaining targets for every guess, scores each partition
//! and ranks the scored guesses.

mod analyzer;
mod partition;
pub mod ranking;

pub use analyzer::{AnalysisRecord, analyze};
pub use partition::{Partition, build_partitions, build_partitions_with_progress};
pub use ranking::{DEFAULT_TOP, RankBy, Rankings, rank};

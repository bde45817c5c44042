//! Best next guess command
//!
//! Partitions the remaining targets for every allowed guess, scores the
//! partitions and ranks the guesses.

use crate::analysis::{DEFAULT_TOP, Partition, Rankings, analyze, build_partitions_with_progress};
use crate::core::{CacheStats, HintEngine, WordSet};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// Options for a ranking run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestGuessConfig {
    /// Entries kept per ranked list
    pub top: usize,
    /// Memoize hints across the run
    pub use_cache: bool,
    /// Draw a progress bar on stderr while partitioning
    pub show_progress: bool,
    /// Return the partitions alongside the rankings
    pub keep_partitions: bool,
}

impl Default for BestGuessConfig {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            use_cache: true,
            show_progress: false,
            keep_partitions: false,
        }
    }
}

/// Outcome of a ranking run
#[derive(Debug)]
pub struct BestGuessResult {
    pub guess_count: usize,
    pub target_count: usize,
    pub rankings: Rankings,
    /// Present when [`BestGuessConfig::keep_partitions`] was set
    pub partitions: Option<Vec<Partition>>,
    pub cache: CacheStats,
    pub duration: Duration,
}

/// Rank every guess in `guesses` against the remaining `targets`
///
/// # Examples
/// ```
/// use wordle_next_guess::commands::{BestGuessConfig, find_best_guess};
/// use wordle_next_guess::wordlists::loader::words_from_slice;
///
/// let guesses = words_from_slice(&["abcde", "fghij"]);
/// let targets = words_from_slice(&["abcde"]);
///
/// let result = find_best_guess(&guesses, &targets, &BestGuessConfig::default());
/// assert_eq!(result.rankings.best_ev.len(), 2);
/// assert_eq!(result.rankings.best_ev_valid[0].guess.as_str(), "abcde");
/// ```
#[must_use]
pub fn find_best_guess(
    guesses: &WordSet,
    targets: &WordSet,
    config: &BestGuessConfig,
) -> BestGuessResult {
    let start = Instant::now();

    if targets.is_empty() {
        warn!("No remaining targets; nothing to rank");
    }
    info!(
        "Partitioning {} remaining targets for {} guesses",
        targets.len(),
        guesses.len()
    );

    let mut engine = if config.use_cache {
        HintEngine::new()
    } else {
        HintEngine::without_cache()
    };

    let progress = if config.show_progress {
        progress_bar(guesses.len())
    } else {
        ProgressBar::hidden()
    };

    let partitions = build_partitions_with_progress(&mut engine, guesses, targets, &progress);
    let records = analyze(&partitions);
    debug!("Analyzed {} guesses", records.len());

    let rankings = Rankings::compute(&records, targets, config.top);
    let cache = engine.stats();
    debug!(
        "Hint cache: {} hits, {} misses, {} entries",
        cache.hits, cache.misses, cache.entries
    );

    let duration = start.elapsed();
    info!("Ranked guesses in {:.2}s", duration.as_secs_f64());

    BestGuessResult {
        guess_count: guesses.len(),
        target_count: targets.len(),
        rankings,
        partitions: config.keep_partitions.then_some(partitions),
        cache,
        duration,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message("partitioning");
    pb
}

//! Partitioning of remaining targets by the hint each guess produces
//!
//! For one guess, every remaining target lands in exactly one cell: the cell
//! for the hint that guess would get against it.

use crate::core::{Hint, HintEngine, Word, WordSet};
use indicatif::ProgressBar;
use rustc_hash::FxHashMap;

/// Remaining targets grouped by hint, for a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    guess: Word,
    cells: FxHashMap<Hint, Vec<Word>>,
}

impl Partition {
    /// Group `targets` by the hint `guess` gets against each of them
    ///
    /// Targets are visited in set order, so every cell comes out sorted.
    pub fn build(engine: &mut HintEngine, guess: Word, targets: &WordSet) -> Self {
        let mut cells: FxHashMap<Hint, Vec<Word>> = FxHashMap::default();
        for target in targets {
            let hint = engine.hint(&guess, target);
            cells.entry(hint).or_default().push(*target);
        }
        Self { guess, cells }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Word {
        self.guess
    }

    /// Targets producing `hint`, if any do
    #[must_use]
    pub fn cell(&self, hint: Hint) -> Option<&[Word]> {
        self.cells.get(&hint).map(Vec::as_slice)
    }

    /// All cells, ordered by hint value
    #[must_use]
    pub fn cells(&self) -> Vec<(Hint, &[Word])> {
        let mut cells: Vec<(Hint, &[Word])> = self
            .cells
            .iter()
            .map(|(&hint, words)| (hint, words.as_slice()))
            .collect();
        cells.sort_unstable_by_key(|&(hint, _)| hint);
        cells
    }

    /// Sizes of the cells, one per distinct hint
    pub fn cell_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.values().map(Vec::len)
    }

    /// Number of distinct hints
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of targets across all cells
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.cell_sizes().sum()
    }
}

/// Partition `targets` for every guess
///
/// Costs `guesses × targets` hint lookups, all routed through `engine`.
/// Returns no partitions at all when `targets` is empty.
///
/// # Examples
/// ```
/// use wordle_next_guess::analysis::build_partitions;
/// use wordle_next_guess::core::{Hint, HintEngine, Word};
/// use wordle_next_guess::wordlists::loader::words_from_slice;
///
/// let guesses = words_from_slice(&["abcde", "fghij"]);
/// let targets = words_from_slice(&["abcde"]);
/// let partitions = build_partitions(&mut HintEngine::new(), &guesses, &targets);
///
/// assert_eq!(partitions.len(), 2);
/// assert_eq!(partitions[1].cell(Hint::NONE).unwrap(), &[Word::new("abcde").unwrap()]);
/// ```
pub fn build_partitions(
    engine: &mut HintEngine,
    guesses: &WordSet,
    targets: &WordSet,
) -> Vec<Partition> {
    build_partitions_with_progress(engine, guesses, targets, &ProgressBar::hidden())
}

/// [`build_partitions`], ticking `progress` once per guess
pub fn build_partitions_with_progress(
    engine: &mut HintEngine,
    guesses: &WordSet,
    targets: &WordSet,
    progress: &ProgressBar,
) -> Vec<Partition> {
    if targets.is_empty() {
        return Vec::new();
    }

    progress.set_length(guesses.len() as u64);
    let partitions = guesses
        .iter()
        .map(|&guess| {
            let partition = Partition::build(engine, guess, targets);
            progress.inc(1);
            partition
        })
        .collect();
    progress.finish_and_clear();

    partitions
}

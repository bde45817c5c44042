//! Summary statistics for each guess's partition
//!
//! The expected value here is the mean cell size, one value per distinct
//! hint. It is deliberately not weighted by how many targets fall in each
//! cell, so it is not the probability-weighted expected number of survivors.

use super::partition::Partition;
use crate::core::Word;

/// Scores for one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRecord {
    pub guess: Word,
    /// Mean partition-cell size
    pub expected_value: f64,
    /// Largest partition-cell size (worst case)
    pub maximum: usize,
    /// Number of distinct hints
    pub cells: usize,
}

impl AnalysisRecord {
    /// Score a single partition
    ///
    /// Returns `None` for a partition with no cells.
    ///
    /// # Examples
    /// ```
    /// use wordle_next_guess::analysis::{AnalysisRecord, Partition};
    /// use wordle_next_guess::core::{HintEngine, Word};
    /// use wordle_next_guess::wordlists::loader::words_from_slice;
    ///
    /// // crate | grate irate | slate
    /// let targets = words_from_slice(&["crate", "grate", "irate", "slate"]);
    /// let guess = Word::new("crane").unwrap();
    /// let partition = Partition::build(&mut HintEngine::new(), guess, &targets);
    ///
    /// let record = AnalysisRecord::from_partition(&partition).unwrap();
    /// assert!((record.expected_value - 4.0 / 3.0).abs() < 1e-9);
    /// assert_eq!(record.maximum, 2);
    /// ```
    #[must_use]
    pub fn from_partition(partition: &Partition) -> Option<Self> {
        let cells = partition.cell_count();
        let maximum = partition.cell_sizes().max()?;
        let total: usize = partition.cell_sizes().sum();

        Some(Self {
            guess: partition.guess(),
            expected_value: total as f64 / cells as f64,
            maximum,
            cells,
        })
    }
}

/// Score every partition, in input order
#[must_use]
pub fn analyze(partitions: &[Partition]) -> Vec<AnalysisRecord> {
    partitions
        .iter()
        .filter_map(AnalysisRecord::from_partition)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::build_partitions;
    use crate::core::HintEngine;
    use crate::wordlists::loader::words_from_slice;

    fn records(guesses: &[&str], targets: &[&str]) -> Vec<AnalysisRecord> {
        let partitions = build_partitions(
            &mut HintEngine::new(),
            &words_from_slice(guesses),
            &words_from_slice(targets),
        );
        analyze(&partitions)
    }

    #[test]
    fn single_target_end_to_end() {
        let result = records(&["abcde", "fghij"], &["abcde"]);

        assert_eq!(result.len(), 2);
        for record in &result {
            assert!((record.expected_value - 1.0).abs() < f64::EPSILON);
            assert_eq!(record.maximum, 1);
            assert_eq!(record.cells, 1);
        }
        assert_eq!(result[0].guess.as_str(), "abcde");
        assert_eq!(result[1].guess.as_str(), "fghij");
    }

    #[test]
    fn expected_value_is_mean_over_cells_not_targets() {
        // zzzzz cannot tell these apart: one cell of 3
        // aaaaa splits them 1 | 2
        let result = records(&["aaaaa", "zzzzz"], &["aaaaa", "bbbbb", "ccccc"]);

        let aaaaa = result[0];
        assert_eq!(aaaaa.cells, 2);
        assert_eq!(aaaaa.maximum, 2);
        // Mean of [1, 2]; the weighted form would give (1 + 4) / 3
        assert!((aaaaa.expected_value - 1.5).abs() < f64::EPSILON);

        let zzzzz = result[1];
        assert_eq!(zzzzz.cells, 1);
        assert_eq!(zzzzz.maximum, 3);
        assert!((zzzzz.expected_value - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_split_scores_one() {
        let result = records(&["crane"], &["crane", "slate", "irate", "zzzzz"]);
        // crane | slate | irate | zzzzz all produce different hints
        assert_eq!(result[0].cells, 4);
        assert_eq!(result[0].maximum, 1);
        assert!((result[0].expected_value - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_targets_no_records() {
        assert!(records(&["crane"], &[]).is_empty());
    }

    #[test]
    fn maximum_bounds_expected_value() {
        let targets = [
            "abbey", "crane", "crate", "geese", "llama", "mamma", "slate", "speed", "trace",
        ];
        for record in records(&["crane", "eerie", "lemma", "zzzzz"], &targets) {
            assert!(record.expected_value <= record.maximum as f64);
            assert!(record.expected_value >= 1.0);
            assert!(record.maximum <= targets.len());
        }
    }
}

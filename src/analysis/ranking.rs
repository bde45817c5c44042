//! Ranking of analyzed guesses
//!
//! Produces the four reported lists: best expected value and best worst case,
//! over all guesses and over guesses that could themselves be the answer.

use super::analyzer::AnalysisRecord;
use crate::core::WordSet;
use std::cmp::Ordering;

/// Default number of entries kept per list
pub const DEFAULT_TOP: usize = 10;

/// Primary sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBy {
    /// Ascending by (expected value, maximum)
    ExpectedValue,
    /// Ascending by (maximum, expected value)
    Maximum,
}

impl RankBy {
    /// Compare two records; the guess word breaks any remaining tie
    #[must_use]
    pub fn compare(self, a: &AnalysisRecord, b: &AnalysisRecord) -> Ordering {
        let by_ev = a.expected_value.total_cmp(&b.expected_value);
        let by_max = a.maximum.cmp(&b.maximum);
        let primary = match self {
            Self::ExpectedValue => by_ev.then(by_max),
            Self::Maximum => by_max.then(by_ev),
        };
        primary.then_with(|| a.guess.cmp(&b.guess))
    }
}

/// Sort `records` by `by` and keep the first `limit`
#[must_use]
pub fn rank(records: &[AnalysisRecord], by: RankBy, limit: usize) -> Vec<AnalysisRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| by.compare(a, b));
    ranked.truncate(limit);
    ranked
}

/// The four ranked lists
#[derive(Debug, Clone, PartialEq)]
pub struct Rankings {
    pub best_ev: Vec<AnalysisRecord>,
    pub best_max: Vec<AnalysisRecord>,
    pub best_ev_valid: Vec<AnalysisRecord>,
    pub best_max_valid: Vec<AnalysisRecord>,
}

impl Rankings {
    /// Rank `records`, keeping at most `limit` per list
    ///
    /// The "valid" lists only consider guesses that are members of `targets`.
    ///
    /// # Examples
    /// ```
    /// use wordle_next_guess::analysis::{Rankings, analyze, build_partitions};
    /// use wordle_next_guess::core::HintEngine;
    /// use wordle_next_guess::wordlists::loader::words_from_slice;
    ///
    /// let guesses = words_from_slice(&["aaaaa", "zzzzz"]);
    /// let targets = words_from_slice(&["aaaaa", "bbbbb"]);
    /// let records = analyze(&build_partitions(&mut HintEngine::new(), &guesses, &targets));
    ///
    /// let rankings = Rankings::compute(&records, &targets, 10);
    /// assert_eq!(rankings.best_ev[0].guess.as_str(), "aaaaa");
    /// assert_eq!(rankings.best_max_valid.len(), 1);
    /// ```
    #[must_use]
    pub fn compute(records: &[AnalysisRecord], targets: &WordSet, limit: usize) -> Self {
        let valid: Vec<AnalysisRecord> = records
            .iter()
            .filter(|record| targets.contains(&record.guess))
            .copied()
            .collect();

        Self {
            best_ev: rank(records, RankBy::ExpectedValue, limit),
            best_max: rank(records, RankBy::Maximum, limit),
            best_ev_valid: rank(&valid, RankBy::ExpectedValue, limit),
            best_max_valid: rank(&valid, RankBy::Maximum, limit),
        }
    }

    /// Titled lists, in report order
    #[must_use]
    pub fn sections(&self) -> [(&'static str, &[AnalysisRecord]); 4] {
        [
            ("Best EV", self.best_ev.as_slice()),
            ("Best Max", self.best_max.as_slice()),
            ("Best EV Valid Guess", self.best_ev_valid.as_slice()),
            ("Best Max Valid Guess", self.best_max_valid.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn record(guess: &str, expected_value: f64, maximum: usize) -> AnalysisRecord {
        AnalysisRecord {
            guess: Word::new(guess).unwrap(),
            expected_value,
            maximum,
            cells: 1,
        }
    }

    fn guesses(records: &[AnalysisRecord]) -> Vec<&str> {
        records.iter().map(|r| r.guess.as_str()).collect()
    }

    #[test]
    fn rank_by_expected_value_breaks_ties_on_maximum() {
        let records = [
            record("aaaaa", 2.0, 5),
            record("bbbbb", 1.5, 9),
            record("ccccc", 2.0, 3),
        ];
        let ranked = rank(&records, RankBy::ExpectedValue, 10);
        assert_eq!(guesses(&ranked), ["bbbbb", "ccccc", "aaaaa"]);
    }

    #[test]
    fn rank_by_maximum_breaks_ties_on_expected_value() {
        let records = [
            record("aaaaa", 2.0, 3),
            record("bbbbb", 1.5, 9),
            record("ccccc", 1.2, 3),
        ];
        let ranked = rank(&records, RankBy::Maximum, 10);
        assert_eq!(guesses(&ranked), ["ccccc", "aaaaa", "bbbbb"]);
    }

    #[test]
    fn full_ties_fall_back_to_word_order() {
        let records = [record("zesty", 1.0, 1), record("abbey", 1.0, 1)];
        assert_eq!(
            guesses(&rank(&records, RankBy::ExpectedValue, 10)),
            ["abbey", "zesty"]
        );
        assert_eq!(
            guesses(&rank(&records, RankBy::Maximum, 10)),
            ["abbey", "zesty"]
        );
    }

    #[test]
    fn rank_truncates_to_limit() {
        let records: Vec<AnalysisRecord> = (0..15u8)
            .map(|i| {
                let text = String::from_utf8(vec![b'a' + i; 5]).unwrap();
                record(&text, f64::from(i), usize::from(i))
            })
            .collect();

        let ranked = rank(&records, RankBy::ExpectedValue, DEFAULT_TOP);
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].guess.as_str(), "aaaaa");
        assert_eq!(ranked[9].guess.as_str(), "jjjjj");
    }

    #[test]
    fn valid_lists_only_hold_targets() {
        let records = [
            record("aaaaa", 1.0, 1),
            record("bbbbb", 2.0, 2),
            record("ccccc", 3.0, 3),
        ];
        let targets = words_from_slice(&["bbbbb", "ccccc", "ddddd"]);

        let rankings = Rankings::compute(&records, &targets, 10);

        assert_eq!(guesses(&rankings.best_ev), ["aaaaa", "bbbbb", "ccccc"]);
        assert_eq!(guesses(&rankings.best_ev_valid), ["bbbbb", "ccccc"]);
        assert_eq!(guesses(&rankings.best_max_valid), ["bbbbb", "ccccc"]);
    }

    #[test]
    fn orderings_can_disagree() {
        let records = [record("aaaaa", 1.5, 8), record("bbbbb", 2.5, 3)];
        let rankings = Rankings::compute(&records, &WordSet::new(), 10);

        assert_eq!(guesses(&rankings.best_ev), ["aaaaa", "bbbbb"]);
        assert_eq!(guesses(&rankings.best_max), ["bbbbb", "aaaaa"]);
        assert!(rankings.best_ev_valid.is_empty());
    }

    #[test]
    fn sections_are_titled_in_report_order() {
        let rankings = Rankings::compute(&[], &WordSet::new(), 10);
        let titles: Vec<&str> = rankings.sections().iter().map(|(t, _)| *t).collect();
        assert_eq!(
            titles,
            [
                "Best EV",
                "Best Max",
                "Best EV Valid Guess",
                "Best Max Valid Guess",
            ]
        );
    }
}

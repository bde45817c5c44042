//! Formatting utilities for terminal output

use crate::analysis::AnalysisRecord;
use crate::core::{Hint, Word};

/// One ranked entry, e.g. `"raise 3.2 expected 12 max"`
#[must_use]
pub fn format_record(record: &AnalysisRecord) -> String {
    format!(
        "{} {:.1} expected {} max",
        record.guess, record.expected_value, record.maximum
    )
}

/// Closing line of a dumped partition, e.g. `"crane - 3 hints - 1.3 expected 2 max"`
#[must_use]
pub fn format_partition_summary(record: &AnalysisRecord) -> String {
    format!(
        "{} - {} hints - {:.1} expected {} max",
        record.guess, record.cells, record.expected_value, record.maximum
    )
}

/// Header line for one partition cell
#[must_use]
pub fn format_cell_header(guess: Word, hint: Hint, size: usize) -> String {
    format!("{guess} - {hint} - {size} words")
}

/// Space-separated words of one partition cell
#[must_use]
pub fn format_cell_words(words: &[Word]) -> String {
    words.iter().map(Word::as_str).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn record_rounds_to_one_decimal() {
        let record = AnalysisRecord {
            guess: word("raise"),
            expected_value: 3.249,
            maximum: 12,
            cells: 4,
        };
        assert_eq!(format_record(&record), "raise 3.2 expected 12 max");
    }

    #[test]
    fn record_whole_expected_value_keeps_decimal() {
        let record = AnalysisRecord {
            guess: word("abcde"),
            expected_value: 1.0,
            maximum: 1,
            cells: 1,
        };
        assert_eq!(format_record(&record), "abcde 1.0 expected 1 max");
    }

    #[test]
    fn partition_summary_shows_hint_count() {
        let record = AnalysisRecord {
            guess: word("crane"),
            expected_value: 4.0 / 3.0,
            maximum: 2,
            cells: 3,
        };
        assert_eq!(
            format_partition_summary(&record),
            "crane - 3 hints - 1.3 expected 2 max"
        );
    }

    #[test]
    fn cell_header() {
        let hint: Hint = "G.G.Y".parse().unwrap();
        assert_eq!(
            format_cell_header(word("eagle"), hint, 3),
            "eagle - G.G.Y - 3 words"
        );
    }

    #[test]
    fn cell_words_joined() {
        assert_eq!(
            format_cell_words(&[word("grate"), word("irate")]),
            "grate irate"
        );
        assert_eq!(format_cell_words(&[]), "");
    }
}

//! Known-answer checks run before any real input is processed
//!
//! If the hint engine or the validator disagree with these tables the run
//! must not continue.

use crate::core::{HintEngine, Word, is_valid_word};
use log::{debug, info};
use std::fmt;

/// (guess, target, expected hint)
pub const HINT_CASES: &[(&str, &str, &str)] = &[
    ("abcde", "abcde", "GGGGG"),
    ("abcde", "fghij", "....."),
    ("acccc", "xxxxa", "Y...."),
    ("eagle", "edges", "G.G.Y"),
    ("eeaaa", "aaeee", "YYYY."),
    ("eeeaa", "aaeee", "YYGYY"),
    ("abcde", "bcdea", "YYYYY"),
];

pub const VALID_WORDS: &[&str] = &["abcde", "aaaaa", "kdiem", "iuuud"];

pub const INVALID_WORDS: &[&str] = &["abc", "abcd", "", "abcdef", "abcd1", "abc,d"];

/// A known-answer case that came out wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfCheckFailure {
    Hint {
        guess: String,
        target: String,
        expected: String,
        actual: String,
    },
    Validator {
        word: String,
        expected: bool,
        actual: bool,
    },
}

impl fmt::Display for SelfCheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hint {
                guess,
                target,
                expected,
                actual,
            } => write!(
                f,
                "self-check failed: {guess} - {target} expected {expected} got {actual}"
            ),
            Self::Validator {
                word,
                expected,
                actual,
            } => write!(
                f,
                "self-check failed: \"{word}\" expects {expected} got {actual}"
            ),
        }
    }
}

impl std::error::Error for SelfCheckFailure {}

/// Check the hint engine against [`HINT_CASES`]
///
/// Goes through `engine`, so the cached path is what gets checked.
///
/// # Errors
///
/// Returns the first case whose hint differs, or which is not made of valid
/// words.
pub fn check_hints(
    engine: &mut HintEngine,
    cases: &[(&str, &str, &str)],
) -> Result<(), SelfCheckFailure> {
    for &(guess, target, expected) in cases {
        let actual = match (Word::new(guess), Word::new(target)) {
            (Ok(g), Ok(t)) => engine.hint(&g, &t).to_string(),
            (Err(e), _) | (_, Err(e)) => e.to_string(),
        };
        debug!("({guess}, {target}), expected {expected} got {actual}");

        if actual != expected {
            return Err(SelfCheckFailure::Hint {
                guess: guess.to_string(),
                target: target.to_string(),
                expected: expected.to_string(),
                actual,
            });
        }
    }
    Ok(())
}

/// Check the validator against known valid and invalid words
///
/// # Errors
///
/// Returns the first word the validator gets wrong.
pub fn check_validator(valid: &[&str], invalid: &[&str]) -> Result<(), SelfCheckFailure> {
    let cases = valid
        .iter()
        .map(|&w| (w, true))
        .chain(invalid.iter().map(|&w| (w, false)));

    for (word, expected) in cases {
        let actual = is_valid_word(word);
        debug!("\"{word}\" expects {expected} got {actual}");

        if actual != expected {
            return Err(SelfCheckFailure::Validator {
                word: word.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

/// Run every built-in check with a fresh engine
///
/// # Errors
///
/// Returns the first failing case.
pub fn run() -> Result<(), SelfCheckFailure> {
    check_hints(&mut HintEngine::new(), HINT_CASES)?;
    check_validator(VALID_WORDS, INVALID_WORDS)?;
    info!(
        "Self-check passed ({} hint cases, {} validator cases)",
        HINT_CASES.len(),
        VALID_WORDS.len() + INVALID_WORDS.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_pass() {
        assert_eq!(run(), Ok(()));
    }

    #[test]
    fn wrong_hint_is_reported() {
        let cases = [("abcde", "abcde", "GGGGG"), ("eagle", "edges", "GGGGG")];
        let err = check_hints(&mut HintEngine::new(), &cases).unwrap_err();

        assert_eq!(
            err,
            SelfCheckFailure::Hint {
                guess: "eagle".into(),
                target: "edges".into(),
                expected: "GGGGG".into(),
                actual: "G.G.Y".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "self-check failed: eagle - edges expected GGGGG got G.G.Y"
        );
    }

    #[test]
    fn malformed_hint_case_fails() {
        let cases = [("abc", "abcde", "GGGGG")];
        assert!(check_hints(&mut HintEngine::new(), &cases).is_err());
    }

    #[test]
    fn wrong_validator_expectation_is_reported() {
        let err = check_validator(&["abcde", "abcd1"], &[]).unwrap_err();

        assert_eq!(
            err,
            SelfCheckFailure::Validator {
                word: "abcd1".into(),
                expected: true,
                actual: false,
            }
        );
        assert_eq!(
            err.to_string(),
            "self-check failed: \"abcd1\" expects true got false"
        );
    }

    #[test]
    fn invalid_words_must_be_rejected() {
        assert!(check_validator(&[], &["crane"]).is_err());
        assert!(check_validator(&[], INVALID_WORDS).is_ok());
    }
}

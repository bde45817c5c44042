//! Wordle word representation and validation
//!
//! A Word is exactly five lowercase ASCII letters, stored inline so it can be
//! copied freely into partitions and cache keys.

use std::collections::BTreeSet;
use std::fmt;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A deduplicated, sorted set of words
pub type WordSet = BTreeSet<Word>;

/// A validated 5-letter word (a-z only)
///
/// Ordering is lexicographic, matching the ordering of the underlying text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    chars: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "Word must contain only letters a-z, found {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

/// Check whether `s` is a well-formed word
///
/// True iff `s` has exactly five characters, all in `a..=z`. Input is not
/// case-folded, so `"Crane"` is rejected.
///
/// # Examples
/// ```
/// use wordle_next_guess::core::is_valid_word;
///
/// assert!(is_valid_word("kdiem"));
/// assert!(!is_valid_word("abc,d"));
/// assert!(!is_valid_word("CRANE"));
/// ```
#[must_use]
pub fn is_valid_word(s: &str) -> bool {
    Word::new(s).is_ok()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside `a..=z`
    ///
    /// # Examples
    /// ```
    /// use wordle_next_guess::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let len = text.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        // Five ASCII characters are exactly five bytes
        let mut chars = [0u8; WORD_LEN];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bytes are validated a-z, so this never falls back
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Per-letter counts, indexed by `letter - b'a'`
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }

    /// Dense 25-bit key: five letters at 5 bits each
    ///
    /// Distinct words always have distinct keys.
    #[inline]
    #[must_use]
    pub fn key(&self) -> u32 {
        self.chars
            .iter()
            .fold(0u32, |acc, &ch| (acc << 5) | u32::from(ch - b'a'))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

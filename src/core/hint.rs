//! Wordle feedback hint calculation and representation
//!
//! A hint encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not available in the target)
//! - 1 = Present (letter in the target, wrong position)
//! - 2 = Correct (letter in the correct position)
//!
//! The hint is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total. It renders as `G`, `Y`, `.`.

use super::Word;
use super::word::WORD_LEN;
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// The rendered symbol: `G`, `Y` or `.`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '.',
        }
    }
}

/// Feedback hint for a guess against a target
///
/// Value range: 0-242 (3^5 - 1 = 243 possible hints)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hint(u8);

impl Hint {
    /// All correct (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Nothing matched
    pub const NONE: Self = Self(0);

    /// Build a hint from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Get the raw hint value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Decode the per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Count positions carrying `mark`
    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().iter().filter(|&&m| m == mark).count()
    }

    /// Calculate the hint when `guess` is played against `target`
    ///
    /// Each target letter is consumed at most once, and exact matches are
    /// resolved before partial ones, so repeated letters are handled the way
    /// the game does it.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the letter pool
    /// 2. Second pass: left to right, mark letters still in the pool as present
    ///
    /// # Examples
    /// ```
    /// use wordle_next_guess::core::{Hint, Word};
    ///
    /// let guess = Word::new("eagle").unwrap();
    /// let target = Word::new("edges").unwrap();
    /// assert_eq!(Hint::compute(&guess, &target).to_string(), "G.G.Y");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, target: &Word) -> Self {
        let mut result = [Mark::Absent; WORD_LEN];
        let mut remaining = target.letter_counts();

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = Mark::Correct;
                remaining[usize::from(guess.char_at(i) - b'a')] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Mark::Correct {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                result[i] = Mark::Present;
                *slot -= 1;
            }
        }

        Self::from_marks(result)
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// Error returned when a hint string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHintError(String);

impl fmt::Display for ParseHintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid hint string: {:?}", self.0)
    }
}

impl std::error::Error for ParseHintError {}

impl std::str::FromStr for Hint {
    type Err = ParseHintError;

    /// Parse a hint like `"G.G.Y"`
    ///
    /// Accepts 'G'/'g' for correct, 'Y'/'y' for present and '.'/'-'/'_' for
    /// absent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LEN {
            return Err(ParseHintError(s.to_string()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' => Mark::Correct,
                'Y' | 'y' => Mark::Present,
                '.' | '-' | '_' => Mark::Absent,
                _ => return Err(ParseHintError(s.to_string())),
            };
        }

        Ok(Self::from_marks(marks))
    }
}

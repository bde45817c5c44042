//! Word list loading utilities
//!
//! Reads newline-delimited word lists from files or any reader. Lines that
//! are not valid words are dropped silently; they are a filter, not an error.

use crate::core::{Word, WordSet};
use log::trace;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Default dictionary used as the guess universe
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// A word list file could not be opened or read
#[derive(Debug)]
pub struct WordListError {
    path: PathBuf,
    source: io::Error,
}

impl WordListError {
    /// The path that failed
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word list {} is unavailable", self.path.display())
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Keep the valid words of newline-delimited `content`
///
/// Lines end at `\n`, `\r\n` or a lone `\r` and are otherwise not trimmed.
/// Lines that are not UTF-8 are dropped like any other malformed line.
///
/// # Examples
/// ```
/// use wordle_next_guess::wordlists::loader::parse_words;
///
/// let words = parse_words(b"crane\nCrane\nabc\n\nslate\r\ncaf\xe9s\rcrane\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
/// assert_eq!(texts, ["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &[u8]) -> WordSet {
    content
        .split(|&b| b == b'\n' || b == b'\r')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let Ok(text) = std::str::from_utf8(line) else {
                trace!("Skipping non-UTF-8 line {:?}", String::from_utf8_lossy(line));
                return None;
            };
            match Word::new(text) {
                Ok(word) => Some(word),
                Err(e) => {
                    trace!("Skipping {text:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Read every valid word from `reader`
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn read_words<R: Read>(mut reader: R) -> io::Result<WordSet> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    Ok(parse_words(&content))
}

/// Load words from a file
///
/// # Errors
///
/// Returns a [`WordListError`] naming the path if the file cannot be opened
/// or read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet, WordListError> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| WordListError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content))
}

/// Convert a string slice to a word set, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_next_guess::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "slate"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> WordSet {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

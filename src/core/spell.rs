//! Spell Checker for word chains
//!
//! The dictionary is a plain word list, one or more space-separated words per
//! line, loaded once and shared read-only between editors. Lookups are exact:
//! case and punctuation count.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::chain::WordChain;
use super::error::{EditorError, Result};

/// Default system word list
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Set of known correct words
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    known_words: HashSet<String>,
}

impl Dictionary {
    /// Load a word list from disk. Any I/O failure is fatal.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let wrap = |source: std::io::Error| EditorError::Dictionary {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(wrap)?;
        let dictionary = Self::from_reader(BufReader::new(file)).map_err(wrap)?;
        debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Read a word list: each line is trimmed and split on single spaces
    pub fn from_reader(reader: impl BufRead) -> std::io::Result<Self> {
        let mut known_words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            for word in line.trim().split(' ') {
                if !word.is_empty() {
                    known_words.insert(word.to_string());
                }
            }
        }
        Ok(Self { known_words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.known_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_words.is_empty()
    }
}

/// Counts words missing from a shared dictionary
#[derive(Debug, Clone)]
pub struct SpellChecker {
    dictionary: Arc<Dictionary>,
}

impl SpellChecker {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }

    /// Check if a word is known/correct
    pub fn check(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// One pass over the document counting unknown words
    pub fn count_misspelled(&self, chain: &WordChain) -> usize {
        self.count_in(chain.words())
    }

    pub fn count_in<'a>(&self, words: impl IntoIterator<Item = &'a str>) -> usize {
        words.into_iter().filter(|word| !self.check(word)).count()
    }
}

//! ReferenceEditor: the contiguous baseline
//!
//! Text lives in a single `Rope` and cut/copy/paste work on character
//! indices with slice semantics: indices past the end clamp to the length and
//! an empty range selects nothing. An inverted range (`i > j`) is normalized
//! to the empty range at `i`, so it never duplicates text. Misspellings are recounted on
//! every call. Used to cross-check `WordEditor` and as the slow side of the
//! benchmark.

use std::sync::Arc;

use ropey::Rope;

use crate::core::editor::TextEditor;
use crate::core::error::Result;
use crate::core::spell::{Dictionary, SpellChecker};

#[derive(Debug)]
pub struct ReferenceEditor {
    rope: Rope,
    paste_text: String,
    checker: SpellChecker,
}

impl ReferenceEditor {
    pub fn new(document: &str, dictionary: Arc<Dictionary>) -> Self {
        Self {
            rope: Rope::from_str(document),
            paste_text: String::new(),
            checker: SpellChecker::new(dictionary),
        }
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    fn clamp(&self, i: usize, j: usize) -> (usize, usize) {
        let len = self.rope.len_chars();
        let start = i.min(len);
        let end = j.min(len).max(start);
        (start, end)
    }
}

impl TextEditor for ReferenceEditor {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn cut(&mut self, i: usize, j: usize) -> usize {
        let (start, end) = self.clamp(i, j);
        self.paste_text = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        end - start
    }

    fn copy(&mut self, i: usize, j: usize) {
        let (start, end) = self.clamp(i, j);
        self.paste_text = self.rope.slice(start..end).to_string();
    }

    fn paste(&mut self, i: usize) -> Result<usize> {
        let at = i.min(self.rope.len_chars());
        self.rope.insert(at, &self.paste_text);
        Ok(self.paste_text.chars().count())
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn misspellings(&self) -> usize {
        let text = self.rope.to_string();
        self.checker
            .count_in(text.split(' ').filter(|word| !word.is_empty()))
    }

    fn word_count(&self) -> usize {
        self.rope
            .chunks()
            .collect::<String>()
            .split_whitespace()
            .count()
    }
}

//! This module defines `WordEditor`, the word-chain editing facade, and the
//! `TextEditor` trait it shares with the contiguous `ReferenceEditor`.
//!
//! Positions are 1-based word positions; ranges are half-open `[i, j)`.

use std::sync::Arc;

use tracing::debug;

use crate::core::chain::{WordChain, Words};
use crate::core::cursor::{Cursor, CursorStrategy};
use crate::core::error::Result;
use crate::core::paste_buffer::PasteBuffer;
use crate::core::spell::{Dictionary, SpellChecker};

/// The operation set both editors expose. The benchmark harness drives
/// editors only through this trait.
pub trait TextEditor {
    /// Short label used in reports
    fn name(&self) -> &'static str;

    /// Remove `[i, j)` into the paste buffer. Returns the number of units removed.
    fn cut(&mut self, i: usize, j: usize) -> usize;

    /// Record `[i, j)` for the next paste
    fn copy(&mut self, i: usize, j: usize);

    /// Insert the paste buffer at `i`. Returns the number of units inserted.
    fn paste(&mut self, i: usize) -> Result<usize>;

    /// The whole document as one string
    fn text(&self) -> String;

    fn misspellings(&self) -> usize;

    fn word_count(&self) -> usize;
}

/// EditorFacade over a `WordChain`
#[derive(Debug)]
pub struct WordEditor {
    chain: WordChain,
    cursor: Cursor,
    paste_buffer: PasteBuffer,
    checker: SpellChecker,
    /// Computed once at construction; see `refresh_misspellings`
    misspelled: usize,
}

impl WordEditor {
    /// Build an editor over `document`, split on whitespace runs
    pub fn new(document: &str, dictionary: Arc<Dictionary>) -> Self {
        Self::with_cursor(document, dictionary, CursorStrategy::default())
    }

    pub fn with_cursor(document: &str, dictionary: Arc<Dictionary>, strategy: CursorStrategy) -> Self {
        let chain = WordChain::from_words(document.split_whitespace());
        let checker = SpellChecker::new(dictionary);
        let misspelled = checker.count_misspelled(&chain);

        debug!(
            words = chain.len(),
            misspelled,
            ?strategy,
            "built word editor"
        );

        Self {
            chain,
            cursor: Cursor::new(strategy),
            paste_buffer: PasteBuffer::new(),
            checker,
            misspelled,
        }
    }

    pub fn word_count(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn chain(&self) -> &WordChain {
        &self.chain
    }

    pub fn paste_buffer(&self) -> &PasteBuffer {
        &self.paste_buffer
    }

    /// Remove the words at `[i, j)` and hold them for the next paste.
    ///
    /// Does nothing if `i >= j`, `i == 0` or `i` is past the last word. A range
    /// running past the end stops at the last word. Returns the number of
    /// words removed.
    ///
    /// Unlike `paste(0)`, which inserts before the first word, `cut(0, j)`
    /// removes nothing.
    pub fn cut(&mut self, i: usize, j: usize) -> usize {
        if i >= j {
            return 0;
        }
        let Some(first) = self.cursor.resolve(&self.chain, i) else {
            return 0;
        };

        let mut last = first;
        for _ in 1..(j - i) {
            match self.chain.next(last) {
                Some(next) => last = next,
                None => break,
            }
        }

        let Some((span, _)) = self.chain.unlink_range(first, last) else {
            return 0;
        };
        self.cursor.note_edit(i);

        if let Some(stale) = self.paste_buffer.record_cut(span) {
            self.chain.discard(stale);
        }
        span.len()
    }

    /// Record `[i, j)` for the next paste. The document is not touched.
    pub fn copy(&mut self, i: usize, j: usize) {
        if i >= j || i == 0 || i > self.chain.len() {
            return;
        }
        if let Some(stale) = self.paste_buffer.record_copy(i, j) {
            self.chain.discard(stale);
        }
    }

    /// Insert the paste buffer after word `i` (before the first word when
    /// `i == 0`).
    ///
    /// Pasting past the end or with nothing cut or copied does nothing. A
    /// copied range is cloned from the document as it is now; if its start
    /// no longer exists an error is returned and the document is unchanged.
    pub fn paste(&mut self, i: usize) -> Result<usize> {
        if i > self.chain.len() {
            return Ok(0);
        }

        let after = if i == 0 {
            None
        } else {
            self.cursor.resolve(&self.chain, i)
        };

        let Some(span) = self
            .paste_buffer
            .materialize(&mut self.chain, &mut self.cursor, i)?
        else {
            return Ok(0);
        };

        self.chain.splice_in(after, span);
        self.cursor.note_edit(i + 1);
        Ok(span.len())
    }

    /// Lazy single pass over the document: each word followed by one space
    pub fn get_text(&self) -> TextStream<'_> {
        TextStream {
            words: self.chain.words(),
        }
    }

    /// Words of the document in order, without separators
    pub fn words(&self) -> Words<'_> {
        self.chain.words()
    }

    /// Misspelled words in the document as it was built.
    ///
    /// The count is not updated by cut or paste; call
    /// `refresh_misspellings` to recount.
    pub fn misspellings(&self) -> usize {
        self.misspelled
    }

    /// Recount against the current document and cache the result
    pub fn refresh_misspellings(&mut self) -> usize {
        self.misspelled = self.checker.count_misspelled(&self.chain);
        self.misspelled
    }

    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        self.chain.check_invariants()
    }
}

impl TextEditor for WordEditor {
    fn name(&self) -> &'static str {
        "word-chain"
    }

    fn cut(&mut self, i: usize, j: usize) -> usize {
        WordEditor::cut(self, i, j)
    }

    fn copy(&mut self, i: usize, j: usize) {
        WordEditor::copy(self, i, j)
    }

    fn paste(&mut self, i: usize) -> Result<usize> {
        WordEditor::paste(self, i)
    }

    fn text(&self) -> String {
        self.get_text().collect()
    }

    fn misspellings(&self) -> usize {
        WordEditor::misspellings(self)
    }

    fn word_count(&self) -> usize {
        WordEditor::word_count(self)
    }
}

/// Iterator returned by `WordEditor::get_text`
#[derive(Debug, Clone)]
pub struct TextStream<'a> {
    words: Words<'a>,
}

impl Iterator for TextStream<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let word = self.words.next()?;
        let mut piece = String::with_capacity(word.len() + 1);
        piece.push_str(word);
        piece.push(' ');
        Some(piece)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}

//! Paste buffer with deferred copy
//!
//! A cut hands its detached nodes straight to the buffer, so nothing is
//! cloned. A copy only records where the words were; they are cloned from the
//! document when (and if) a paste consumes them, so a copy that is never
//! pasted costs O(1).

use tracing::{trace, warn};

use super::chain::{Span, WordChain};
use super::cursor::Cursor;
use super::error::{EditorError, Result};

/// Half-open [start, end) word positions recorded by a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyBoundary {
    pub start: usize,
    pub end: usize,
}

impl CopyBoundary {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// What the next paste will insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteContent {
    #[default]
    Empty,
    /// Nodes removed by a cut, owned by the buffer
    Cut(Span),
    /// Where to clone from at paste time
    Copy(CopyBoundary),
}

#[derive(Debug, Default)]
pub struct PasteBuffer {
    content: PasteContent,
}

impl PasteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> PasteContent {
        self.content
    }

    /// Whether the last recorded operation was a copy
    pub fn last_was_copy(&self) -> bool {
        matches!(self.content, PasteContent::Copy(_))
    }

    /// Number of words the next paste would insert, if the source is intact
    pub fn pending_len(&self) -> usize {
        match self.content {
            PasteContent::Empty => 0,
            PasteContent::Cut(span) => span.len(),
            PasteContent::Copy(boundary) => boundary.len(),
        }
    }

    /// Take ownership of a cut span.
    /// Returns the span it displaces, which the caller must discard.
    pub fn record_cut(&mut self, span: Span) -> Option<Span> {
        self.replace(PasteContent::Cut(span))
    }

    /// Remember a copied range without touching the document.
    /// Returns a displaced cut span, which the caller must discard.
    pub fn record_copy(&mut self, start: usize, end: usize) -> Option<Span> {
        self.replace(PasteContent::Copy(CopyBoundary { start, end }))
    }

    /// Produce the span to paste after position `dest`.
    ///
    /// A cut span is handed over as-is; afterwards the buffer refers to the
    /// positions the span will occupy, so pasting again clones those words
    /// from the document. A copy is cloned from the document as it is now.
    /// Returns `Ok(None)` when nothing has been cut or copied.
    pub fn materialize(
        &mut self,
        chain: &mut WordChain,
        cursor: &mut Cursor,
        dest: usize,
    ) -> Result<Option<Span>> {
        match self.content {
            PasteContent::Empty => Ok(None),
            PasteContent::Cut(span) => {
                self.content = PasteContent::Copy(CopyBoundary {
                    start: dest + 1,
                    end: dest + 1 + span.len(),
                });
                trace!(len = span.len(), dest, "pasting cut span");
                Ok(Some(span))
            }
            PasteContent::Copy(boundary) => {
                let Some(first) = cursor.resolve(chain, boundary.start) else {
                    warn!(
                        start = boundary.start,
                        len = chain.len(),
                        "copied range is gone"
                    );
                    return Err(EditorError::CopySourceOutOfRange {
                        start: boundary.start,
                        len: chain.len(),
                    });
                };
                let span = chain.clone_run(first, boundary.len());
                trace!(
                    start = boundary.start,
                    cloned = span.len(),
                    "materialized deferred copy"
                );
                Ok(Some(span))
            }
        }
    }

    fn replace(&mut self, content: PasteContent) -> Option<Span> {
        match std::mem::replace(&mut self.content, content) {
            PasteContent::Cut(span) => Some(span),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(text: &str) -> WordChain {
        WordChain::from_words(text.split_whitespace())
    }

    #[test]
    fn test_empty_buffer_materializes_nothing() {
        let mut chain = chain_of("a b");
        let mut buffer = PasteBuffer::new();
        let span = buffer
            .materialize(&mut chain, &mut Cursor::default(), 1)
            .unwrap();
        assert!(span.is_none());
    }

    #[test]
    fn test_copy_is_deferred() {
        let mut chain = chain_of("a b c d");
        let mut buffer = PasteBuffer::new();
        assert!(buffer.record_copy(2, 4).is_none());

        assert!(buffer.last_was_copy());
        assert_eq!(buffer.pending_len(), 2);
        assert_eq!(chain.live_nodes(), 4);

        let span = buffer
            .materialize(&mut chain, &mut Cursor::default(), 4)
            .unwrap()
            .unwrap();
        assert_eq!(chain.span_words(span).collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(chain.live_nodes(), 6);
        // copy boundary stays for the next paste
        assert!(buffer.last_was_copy());
    }

    #[test]
    fn test_cut_is_handed_over() {
        let mut chain = chain_of("a b c d");
        let (first, last) = (chain.head().unwrap(), chain.head().unwrap());
        let (span, _) = chain.unlink_range(first, last).unwrap();

        let mut buffer = PasteBuffer::new();
        buffer.record_cut(span);
        assert!(!buffer.last_was_copy());

        let pasted = buffer
            .materialize(&mut chain, &mut Cursor::default(), 2)
            .unwrap();
        assert_eq!(pasted, Some(span));
        assert_eq!(chain.live_nodes(), 4);
        assert_eq!(
            buffer.content(),
            PasteContent::Copy(CopyBoundary { start: 3, end: 4 })
        );
    }

    #[test]
    fn test_record_returns_displaced_cut() {
        let mut chain = chain_of("a b c");
        let head = chain.head().unwrap();
        let (span, _) = chain.unlink_range(head, head).unwrap();

        let mut buffer = PasteBuffer::new();
        buffer.record_cut(span);
        assert_eq!(buffer.record_copy(1, 2), Some(span));
        assert_eq!(buffer.record_copy(1, 2), None);
    }

    #[test]
    fn test_copy_source_gone() {
        let mut chain = chain_of("a b");
        let mut buffer = PasteBuffer::new();
        buffer.record_copy(5, 6);

        let err = buffer
            .materialize(&mut chain, &mut Cursor::default(), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            EditorError::CopySourceOutOfRange { start: 5, len: 2 }
        ));
        assert_eq!(chain.live_nodes(), 2);
    }
}

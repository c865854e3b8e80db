//! WordChain: the document as a doubly-linked chain of word nodes
//!
//! Nodes live in an arena (`slots`) and link to each other through `NodeId`
//! handles instead of references, so ranges can be unlinked and spliced
//! without aliasing. Runs removed from the document stay in the same arena as
//! detached `Span`s until they are spliced back in or discarded.

use tracing::trace;

use super::id::NodeId;

#[derive(Debug, Clone)]
struct WordNode {
    text: String,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// A detached run of nodes: internally linked, `head.prev` and `tail.next`
/// are `None`. A zero-length span has neither head nor tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl Span {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// The document chain plus the arena holding every node it (or a detached
/// span cut from it) uses.
#[derive(Debug, Default)]
pub struct WordChain {
    slots: Vec<Option<WordNode>>,
    /// Freed slot indices, reused before the arena grows
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl WordChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document chain from tokens in order
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut chain = Self::new();
        for word in words {
            let id = chain.alloc(word.into());
            match chain.tail {
                Some(tail) => {
                    chain.set_next(tail, Some(id));
                    chain.set_prev(id, Some(tail));
                }
                None => chain.head = Some(id),
            }
            chain.tail = Some(id);
            chain.len += 1;
        }
        chain
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn text(&self, id: NodeId) -> &str {
        &self.node(id).text
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).prev
    }

    /// Number of live nodes in the arena, document and detached spans alike
    pub fn live_nodes(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Total slots ever allocated (live or free)
    pub fn arena_capacity(&self) -> usize {
        self.slots.len()
    }

    /// Words of the document in order
    pub fn words(&self) -> Words<'_> {
        Words {
            chain: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Words of a detached span in order
    pub fn span_words(&self, span: Span) -> Words<'_> {
        Words {
            chain: self,
            cursor: span.head,
            remaining: span.len,
        }
    }

    /// Remove the run `first..=last` from the document as a unit.
    ///
    /// Returns the detached span and the node that followed `last` (the
    /// remainder head). Returns `None` without touching anything if `last`
    /// cannot be reached from `first` by following `next`. `first` must be a
    /// node of the document chain, not of a detached span.
    pub fn unlink_range(&mut self, first: NodeId, last: NodeId) -> Option<(Span, Option<NodeId>)> {
        let mut count = 1;
        let mut current = first;
        while current != last {
            current = self.next(current)?;
            count += 1;
        }

        let before = self.prev(first);
        let after = self.next(last);

        match before {
            Some(b) => self.set_next(b, after),
            None => self.head = after,
        }
        match after {
            Some(a) => self.set_prev(a, before),
            None => self.tail = before,
        }

        self.set_prev(first, None);
        self.set_next(last, None);
        self.len -= count;

        trace!(%first, %last, count, remaining = self.len, "unlinked range");
        Some((
            Span {
                head: Some(first),
                tail: Some(last),
                len: count,
            },
            after,
        ))
    }

    /// Insert a detached span right after `after`, or at the front when
    /// `after` is `None`. The span's nodes become part of the document.
    pub fn splice_in(&mut self, after: Option<NodeId>, span: Span) {
        let (Some(first), Some(last)) = (span.head, span.tail) else {
            return;
        };

        let following = match after {
            Some(a) => self.next(a),
            None => self.head,
        };

        self.set_prev(first, after);
        self.set_next(last, following);
        match after {
            Some(a) => self.set_next(a, Some(first)),
            None => self.head = Some(first),
        }
        match following {
            Some(f) => self.set_prev(f, Some(last)),
            None => self.tail = Some(last),
        }

        self.len += span.len;
        trace!(count = span.len, total = self.len, "spliced span");
    }

    /// Clone up to `count` words starting at `first` into a new detached span.
    /// Stops early if the chain ends first.
    pub fn clone_run(&mut self, first: NodeId, count: usize) -> Span {
        let mut span = Span::empty();
        let mut source = Some(first);

        while span.len < count {
            let Some(id) = source else { break };
            let text = self.text(id).to_owned();
            source = self.next(id);

            let copy = self.alloc(text);
            match span.tail {
                Some(tail) => {
                    self.set_next(tail, Some(copy));
                    self.set_prev(copy, Some(tail));
                }
                None => span.head = Some(copy),
            }
            span.tail = Some(copy);
            span.len += 1;
        }

        span
    }

    /// Release a detached span's nodes back to the arena
    pub fn discard(&mut self, span: Span) {
        let mut current = span.head;
        let mut released = 0;
        while let Some(id) = current {
            if released == span.len {
                break;
            }
            current = self.next(id);
            self.slots[id.index()] = None;
            self.free.push(id.index());
            released += 1;
        }
        trace!(released, "discarded span");
    }

    /// Walk the document and verify every link invariant.
    ///
    /// Checks head/tail boundaries, that each `next` is mirrored by the
    /// following node's `prev`, and that `len` matches the reachable nodes.
    pub fn check_invariants(&self) -> Result<(), String> {
        match (self.head, self.tail) {
            (None, None) => {
                if self.len != 0 {
                    return Err(format!("empty chain reports length {}", self.len));
                }
                return Ok(());
            }
            (Some(_), None) | (None, Some(_)) => {
                return Err("exactly one of head and tail is set".to_string());
            }
            (Some(head), Some(tail)) => {
                if self.prev(head).is_some() {
                    return Err(format!("head {} has a prev link", head));
                }
                if self.next(tail).is_some() {
                    return Err(format!("tail {} has a next link", tail));
                }
            }
        }

        let limit = self.live_nodes();
        let mut reached = 0;
        let mut previous: Option<NodeId> = None;
        let mut current = self.head;

        while let Some(id) = current {
            reached += 1;
            if reached > limit {
                return Err("cycle detected while walking the chain".to_string());
            }
            if self.prev(id) != previous {
                return Err(format!(
                    "{} has prev {:?}, expected {:?}",
                    id,
                    self.prev(id),
                    previous
                ));
            }
            previous = Some(id);
            current = self.next(id);
        }

        if previous != self.tail {
            return Err(format!(
                "walk ended at {:?} but tail is {:?}",
                previous, self.tail
            ));
        }
        if reached != self.len {
            return Err(format!(
                "length is {} but {} nodes are reachable",
                self.len, reached
            ));
        }
        Ok(())
    }

    fn alloc(&mut self, text: String) -> NodeId {
        let node = WordNode {
            text,
            prev: None,
            next: None,
        };
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Live node lookup. A freed handle here is a broken chain invariant.
    fn node(&self, id: NodeId) -> &WordNode {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("stale word handle {}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut WordNode {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("stale word handle {}", id),
        }
    }

    fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.node_mut(id).next = next;
    }

    fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        self.node_mut(id).prev = prev;
    }
}

/// Iterator over the words of a chain or span
#[derive(Debug, Clone)]
pub struct Words<'a> {
    chain: &'a WordChain,
    cursor: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        self.cursor = self.chain.next(id);
        self.remaining -= 1;
        Some(self.chain.text(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

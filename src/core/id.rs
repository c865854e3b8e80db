/// ID-based handle system for word nodes
/// Replaces pointer-based linked lists with Rust-idiomatic handles
use std::fmt;

/// Index of a word node inside a `WordChain` arena
///
/// Handles are only meaningful for the arena that issued them and only while
/// the node is alive. A freed slot may be reused by a later allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

//! Cursor: maps 1-based word positions to nodes of a `WordChain`

use super::chain::WordChain;
use super::id::NodeId;

/// How the cursor walks to a requested position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStrategy {
    /// Restart from the head on every request. O(position).
    #[default]
    FromHead,
    /// Start from the closest of head, tail or the last resolved position.
    Nearest,
}

impl std::str::FromStr for CursorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "from-head" | "head" => Ok(Self::FromHead),
            "nearest" => Ok(Self::Nearest),
            other => Err(format!("unknown cursor strategy: {}", other)),
        }
    }
}

/// Position marker over a chain
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    strategy: CursorStrategy,
    /// Last resolved (position, node), only kept by `Nearest`
    anchor: Option<(usize, NodeId)>,
}

impl Cursor {
    pub fn new(strategy: CursorStrategy) -> Self {
        Self {
            strategy,
            anchor: None,
        }
    }

    /// Resolve `position` to its node. Returns `None` when the position is 0
    /// or past the tail.
    pub fn resolve(&mut self, chain: &WordChain, position: usize) -> Option<NodeId> {
        if position == 0 || position > chain.len() {
            return None;
        }

        let node = match self.strategy {
            CursorStrategy::FromHead => walk_forward(chain, chain.head()?, position - 1)?,
            CursorStrategy::Nearest => self.resolve_nearest(chain, position)?,
        };

        if self.strategy == CursorStrategy::Nearest {
            self.anchor = Some((position, node));
        }
        Some(node)
    }

    /// Tell the cursor the document changed at or after `position`.
    /// An anchor at or past that position no longer names the same word.
    pub fn note_edit(&mut self, position: usize) {
        if let Some((anchored, _)) = self.anchor {
            if anchored >= position {
                self.anchor = None;
            }
        }
    }

    fn resolve_nearest(&self, chain: &WordChain, position: usize) -> Option<NodeId> {
        let len = chain.len();
        let from_head = position - 1;
        let from_tail = len - position;

        if let Some((anchored, node)) = self.anchor {
            let distance = anchored.abs_diff(position);
            if distance < from_head && distance < from_tail {
                return if position >= anchored {
                    walk_forward(chain, node, distance)
                } else {
                    walk_backward(chain, node, distance)
                };
            }
        }

        if from_head <= from_tail {
            walk_forward(chain, chain.head()?, from_head)
        } else {
            walk_backward(chain, chain.tail()?, from_tail)
        }
    }
}

/// `None` if the chain ends before `steps` links were followed
fn walk_forward(chain: &WordChain, start: NodeId, steps: usize) -> Option<NodeId> {
    let mut node = start;
    for _ in 0..steps {
        node = chain.next(node)?;
    }
    Some(node)
}

fn walk_backward(chain: &WordChain, start: NodeId, steps: usize) -> Option<NodeId> {
    let mut node = start;
    for _ in 0..steps {
        node = chain.prev(node)?;
    }
    Some(node)
}

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::{NodeId, SearchNode};

/// Discovered-but-unexpanded nodes, popped in a strategy-specific order.
pub trait Frontier {
    fn push(&mut self, id: NodeId, node: &SearchNode);
    fn pop(&mut self) -> Option<NodeId>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Oldest node first.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Newest node first.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, id: NodeId, _node: &SearchNode) {
        self.stack.push(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Value a [`PriorityFrontier`] orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityKey {
    /// `g`, cost so far.
    Cost,
    /// `h`, heuristic only.
    Estimate,
    /// `f = g + h`.
    Total,
}

impl PriorityKey {
    pub fn of(&self, node: &SearchNode) -> u32 {
        match self {
            PriorityKey::Cost => node.g,
            PriorityKey::Estimate => node.h,
            PriorityKey::Total => node.g + node.h,
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    priority: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and the earliest insertion among equals.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary heap keyed by a [`PriorityKey`].
///
/// There is no decrease-key: the same board may sit in the heap several
/// times at different priorities. Callers must discard popped nodes whose
/// board was already expanded.
pub struct PriorityFrontier {
    key: PriorityKey,
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl PriorityFrontier {
    pub fn new(key: PriorityKey) -> Self {
        Self {
            key,
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        self.heap.push(Entry {
            priority: self.key.of(node),
            seq: self.seq,
            id,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

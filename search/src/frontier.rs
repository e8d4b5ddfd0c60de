//! Fringe disciplines: LIFO, FIFO and best-first buckets.
//!
//! A fringe stores [`NodeId`]s only; the nodes themselves stay in the
//! [`SearchTree`](crate::tree::SearchTree). Each fringe tracks the largest
//! size it ever reached.

use std::collections::{BTreeMap, VecDeque};

use crate::tree::NodeId;

/// Pending-node container shared by all strategies.
///
/// `priority` is the best-first key (`heuristic + depth`). Disciplines that
/// do not order by key ignore it.
pub trait Fringe {
    /// Add a generated node.
    fn push(&mut self, id: NodeId, priority: u64);

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Current number of pending nodes.
    fn len(&self) -> usize;

    /// High-water mark of [`Fringe::len`].
    fn high_water(&self) -> usize;

    /// Whether no nodes are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out fringe (depth-first search).
#[derive(Debug, Default)]
pub struct StackFringe {
    stack: Vec<NodeId>,
    high_water: usize,
}

impl StackFringe {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for StackFringe {
    fn push(&mut self, id: NodeId, _priority: u64) {
        self.stack.push(id);
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// First-in-first-out fringe (breadth-first search).
#[derive(Debug, Default)]
pub struct QueueFringe {
    queue: VecDeque<NodeId>,
    high_water: usize,
}

impl QueueFringe {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fringe for QueueFringe {
    fn push(&mut self, id: NodeId, _priority: u64) {
        self.queue.push_back(id);
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Best-first fringe: an ordered multimap from key to a FIFO bucket.
///
/// Pops from the lowest key. Within one key, nodes come out in the order they
/// were pushed. A bucket is dropped from the map as soon as it empties, so
/// the first entry of the map is always a non-empty bucket.
#[derive(Debug, Default)]
pub struct BucketFringe {
    buckets: BTreeMap<u64, VecDeque<NodeId>>,
    len: usize,
    high_water: usize,
}

impl BucketFringe {
    /// Create an empty bucket map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowest key currently pending.
    #[must_use]
    pub fn min_priority(&self) -> Option<u64> {
        self.buckets.keys().next().copied()
    }

    /// Number of distinct keys currently pending.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl Fringe for BucketFringe {
    fn push(&mut self, id: NodeId, priority: u64) {
        self.buckets.entry(priority).or_default().push_back(id);
        self.len += 1;
        self.high_water = self.high_water.max(self.len);
    }

    fn pop(&mut self) -> Option<NodeId> {
        let mut entry = self.buckets.first_entry()?;
        let id = entry.get_mut().pop_front();
        if entry.get().is_empty() {
            entry.remove();
        }
        if id.is_some() {
            self.len -= 1;
        }
        id
    }

    fn len(&self) -> usize {
        self.len
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

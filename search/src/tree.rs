//! Per-invocation node arena.
//!
//! Every node a search creates lives in one [`SearchTree`]. Parent links are
//! indices into the arena, so the tree has no ownership cycles and paths can
//! be reconstructed after the search returns.

use crate::node::SearchNode;

/// Index of a node inside its [`SearchTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    /// Position of this node in creation order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct TreeEntry<N> {
    node: N,
    parent: Option<NodeId>,
    depth: u32,
    heuristic: u64,
}

/// Arena owning the nodes of one search invocation.
///
/// Depth and heuristic are fixed when a node enters the arena: the root sits
/// at depth 0, a child at its parent's depth plus one, and the heuristic is
/// read from [`SearchNode::heuristic`] exactly once.
#[derive(Debug, Clone)]
pub struct SearchTree<N> {
    entries: Vec<TreeEntry<N>>,
}

impl<N: SearchNode> SearchTree<N> {
    /// Create a tree rooted at `root` (depth 0).
    #[must_use]
    pub fn with_root(root: N) -> Self {
        let heuristic = root.heuristic();
        Self {
            entries: vec![TreeEntry {
                node: root,
                parent: None,
                depth: 0,
                heuristic,
            }],
        }
    }

    /// Insert `node` as a child of `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn insert_child(&mut self, parent: NodeId, node: N) -> NodeId {
        let depth = self.entries[parent.0].depth.saturating_add(1);
        let heuristic = node.heuristic();
        let id = NodeId(self.entries.len());
        self.entries.push(TreeEntry {
            node,
            parent: Some(parent),
            depth,
            heuristic,
        });
        id
    }
}

impl<N> SearchTree<N> {
    /// The node stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &N {
        &self.entries[id.0].node
    }

    /// Path length from the root to `id`.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> u32 {
        self.entries[id.0].depth
    }

    /// The node `id` was generated from (`None` for the root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries[id.0].parent
    }

    /// Heuristic value cached when `id` entered the tree.
    #[must_use]
    pub fn heuristic(&self, id: NodeId) -> u64 {
        self.entries[id.0].heuristic
    }

    /// Best-first ordering key: heuristic plus depth.
    #[must_use]
    pub fn f_value(&self, id: NodeId) -> u64 {
        let entry = &self.entries[id.0];
        entry.heuristic.saturating_add(u64::from(entry.depth))
    }

    /// Ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.depth(id) as usize + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.parent(current);
        }
        path.reverse();
        path
    }

    /// Nodes from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_nodes(&self, id: NodeId) -> Vec<&N> {
        self.path_to(id).into_iter().map(|p| self.node(p)).collect()
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the tree and take ownership of the node under `id`.
    #[must_use]
    pub fn into_node(mut self, id: NodeId) -> N {
        self.entries.swap_remove(id.0).node
    }
}

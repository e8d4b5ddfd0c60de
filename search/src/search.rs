//! Search entry points and the shared expansion loop.
//!
//! All three strategies run the same skeleton:
//!
//! 1. Validate the depth limit (before touching the root).
//! 2. Re-root the supplied node at depth 0; return it at once if it is a goal.
//! 3. Pop a node, generate its children, goal-test each child *before* it
//!    could enter the fringe, and push the survivors of the rejection rules.
//! 4. An empty fringe is [`SearchError::GoalNotFound`].
//!
//! They differ only in fringe discipline, child ordering and duplicate rule.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SearchError;
use crate::frontier::{BucketFringe, Fringe, QueueFringe, StackFringe};
use crate::node::SearchNode;
use crate::policy::{admits_children_of, validate_depth_limit, SearchPolicy};
use crate::stats::SearchStats;
use crate::tree::{NodeId, SearchTree};

/// The three search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// LIFO fringe, shuffled children, optional expanded-set pruning.
    DepthFirst,
    /// FIFO fringe, generation order, optional expanded-set pruning.
    BreadthFirst,
    /// Lowest `heuristic + depth` first, immediate-parent de-duplication.
    Heuristic,
}

impl Strategy {
    /// Stable lowercase identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
            Self::Heuristic => "heuristic",
        }
    }

    /// Parse the identifier produced by [`Strategy::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "depth_first" => Some(Self::DepthFirst),
            "breadth_first" => Some(Self::BreadthFirst),
            "heuristic" => Some(Self::Heuristic),
            _ => None,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful search: the goal, the tree that reached it, and counters.
#[derive(Debug, Clone)]
pub struct SearchOutcome<N> {
    /// Every node the search kept, rooted at the supplied node.
    pub tree: SearchTree<N>,
    /// Id of the goal node inside `tree`.
    pub goal: NodeId,
    /// Counters for this invocation.
    pub stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    /// The goal node.
    #[must_use]
    pub fn goal(&self) -> &N {
        self.tree.node(self.goal)
    }

    /// Path length from the root to the goal.
    #[must_use]
    pub fn goal_depth(&self) -> u32 {
        self.tree.depth(self.goal)
    }

    /// Nodes from the root to the goal, inclusive.
    #[must_use]
    pub fn path(&self) -> Vec<&N> {
        self.tree.path_nodes(self.goal)
    }

    /// Consume the outcome and keep only the goal node.
    #[must_use]
    pub fn into_goal(self) -> N {
        self.tree.into_node(self.goal)
    }
}

/// Which generated children count as duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DuplicateRule {
    Keep,
    ExpandedSet,
    ImmediateParent,
}

impl DuplicateRule {
    fn for_policy(policy: &SearchPolicy) -> Self {
        if policy.prune_expanded {
            Self::ExpandedSet
        } else {
            Self::Keep
        }
    }
}

/// Nodes already popped from the fringe, in expansion order.
///
/// Membership is a linear scan with [`SearchNode::states_equal`]; the
/// contract offers no hash or ordering over states.
#[derive(Debug, Default)]
struct ExpandedSet {
    ids: Vec<NodeId>,
}

impl ExpandedSet {
    fn record(&mut self, id: NodeId) {
        self.ids.push(id);
    }

    fn contains_state<N: SearchNode>(&self, tree: &SearchTree<N>, candidate: &N) -> bool {
        self.ids
            .iter()
            .any(|&id| candidate.states_equal(tree.node(id)))
    }
}

/// Depth-first search with a thread-local random child order.
///
/// See [`depth_first_search_with_rng`]. Exploration order differs from call
/// to call; use the `_with_rng` variant with a seeded generator for
/// reproducible runs.
///
/// # Errors
///
/// - [`SearchError::InvalidDepthLimit`] if `policy.depth_limit` is 0.
/// - [`SearchError::GoalNotFound`] if every branch is exhausted or cut off by
///   the depth limit without reaching a goal.
pub fn depth_first_search<N: SearchNode>(
    root: N,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<N>, SearchError> {
    let mut rng = rand::rng();
    depth_first_search_with_rng(root, policy, &mut rng)
}

/// Depth-first search drawing child order from `rng`.
///
/// The fringe is a stack. Each popped node's children are shuffled before
/// they are goal-tested and pushed. With `prune_expanded`, a child whose state
/// equals any already expanded node is dropped. Depth-first search may return
/// a goal deeper than the shallowest one, but never deeper than
/// `depth_limit`.
///
/// # Errors
///
/// Same as [`depth_first_search`].
pub fn depth_first_search_with_rng<N, R>(
    root: N,
    policy: &SearchPolicy,
    rng: &mut R,
) -> Result<SearchOutcome<N>, SearchError>
where
    N: SearchNode,
    R: Rng + ?Sized,
{
    run(
        Strategy::DepthFirst,
        root,
        policy.depth_limit,
        DuplicateRule::for_policy(policy),
        StackFringe::new(),
        |children: &mut Vec<N>| children.shuffle(&mut *rng),
    )
}

/// Breadth-first search.
///
/// The fringe is a queue and children keep their generation order, so nodes
/// are expanded in non-decreasing depth. The returned goal is at the minimal
/// depth reachable from the root, with or without `prune_expanded`.
///
/// # Errors
///
/// - [`SearchError::InvalidDepthLimit`] if `policy.depth_limit` is 0.
/// - [`SearchError::GoalNotFound`] if no goal lies within `depth_limit`.
pub fn breadth_first_search<N: SearchNode>(
    root: N,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<N>, SearchError> {
    run(
        Strategy::BreadthFirst,
        root,
        policy.depth_limit,
        DuplicateRule::for_policy(policy),
        QueueFringe::new(),
        |_: &mut Vec<N>| {},
    )
}

/// Heuristic best-first search ordered by `heuristic + depth`.
///
/// Nodes with equal keys are expanded in the order they were generated.
///
/// Unlike the other two strategies this one keeps no expanded set: a child is
/// dropped as a duplicate only when its state equals its *immediate parent*.
/// Longer cycles are re-expanded until the depth limit cuts them off. The
/// heuristic is not checked for admissibility and no closed set is
/// re-opened, so the first goal found is not guaranteed to be the shallowest
/// one.
///
/// # Errors
///
/// - [`SearchError::InvalidDepthLimit`] if `depth_limit` is 0.
/// - [`SearchError::GoalNotFound`] if the fringe empties without a goal.
pub fn heuristic_search<N: SearchNode>(
    root: N,
    depth_limit: u32,
) -> Result<SearchOutcome<N>, SearchError> {
    run(
        Strategy::Heuristic,
        root,
        depth_limit,
        DuplicateRule::ImmediateParent,
        BucketFringe::new(),
        |_: &mut Vec<N>| {},
    )
}

fn run<N, F, O>(
    strategy: Strategy,
    root: N,
    depth_limit: u32,
    rule: DuplicateRule,
    mut fringe: F,
    mut order_children: O,
) -> Result<SearchOutcome<N>, SearchError>
where
    N: SearchNode,
    F: Fringe,
    O: FnMut(&mut Vec<N>),
{
    validate_depth_limit(depth_limit)?;

    tracing::debug!(
        strategy = strategy.as_str(),
        depth_limit,
        duplicate_rule = ?rule,
        "search started"
    );

    let mut tree = SearchTree::with_root(root);
    let mut stats = SearchStats {
        goal_tests: 1,
        ..SearchStats::default()
    };

    if tree.node(NodeId::ROOT).is_goal() {
        return Ok(finish(strategy, tree, NodeId::ROOT, stats));
    }

    let mut expanded = ExpandedSet::default();
    fringe.push(NodeId::ROOT, tree.f_value(NodeId::ROOT));

    while let Some(current) = fringe.pop() {
        stats.expansions += 1;
        if rule == DuplicateRule::ExpandedSet {
            expanded.record(current);
        }

        let parent_depth = tree.depth(current);
        let admits_children = admits_children_of(depth_limit, parent_depth);

        let mut children = tree.node(current).generate_children();
        order_children(&mut children);

        tracing::trace!(
            node = current.index(),
            depth = parent_depth,
            children = children.len(),
            fringe = fringe.len(),
            "expanding"
        );

        for child in children {
            stats.generated += 1;
            stats.goal_tests += 1;
            if child.is_goal() {
                let goal = tree.insert_child(current, child);
                stats.frontier_high_water = fringe.high_water() as u64;
                return Ok(finish(strategy, tree, goal, stats));
            }

            if !admits_children {
                stats.rejected_by_depth += 1;
                continue;
            }

            let duplicate = match rule {
                DuplicateRule::Keep => false,
                DuplicateRule::ExpandedSet => expanded.contains_state(&tree, &child),
                DuplicateRule::ImmediateParent => child.states_equal(tree.node(current)),
            };
            if duplicate {
                stats.pruned_duplicates += 1;
                continue;
            }

            let id = tree.insert_child(current, child);
            fringe.push(id, tree.f_value(id));
            stats.enqueued += 1;
        }
    }

    stats.frontier_high_water = fringe.high_water() as u64;
    tracing::debug!(
        strategy = strategy.as_str(),
        depth_limit,
        expansions = stats.expansions,
        generated = stats.generated,
        nodes = tree.len(),
        "search exhausted without reaching a goal"
    );
    Err(SearchError::GoalNotFound { depth_limit })
}

fn finish<N>(
    strategy: Strategy,
    tree: SearchTree<N>,
    goal: NodeId,
    stats: SearchStats,
) -> SearchOutcome<N> {
    tracing::debug!(
        strategy = strategy.as_str(),
        goal_depth = tree.depth(goal),
        expansions = stats.expansions,
        generated = stats.generated,
        nodes = tree.len(),
        "goal reached"
    );
    SearchOutcome { tree, goal, stats }
}

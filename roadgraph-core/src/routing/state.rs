use std::cmp::Ordering;

use fixedbitset::FixedBitSet;
use ordered_float::OrderedFloat;
use petgraph::graph::NodeIndex;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(super) struct State {
    pub(super) priority: OrderedFloat<f64>,
    pub(super) node: NodeIndex,
}

impl State {
    pub(super) fn new(priority: f64, node: NodeIndex) -> Self {
        Self {
            priority: OrderedFloat(priority),
            node,
        }
    }
}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by priority (reversed from standard Rust BinaryHeap),
        // earlier-inserted node first on ties
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call search annotations, indexed by node.
///
/// Every search owns a fresh instance, so nothing from one run is visible to
/// the next and concurrent searches over a shared graph never interfere.
#[derive(Debug)]
pub(super) struct SearchSpace {
    /// Accumulated road length from the start
    pub(super) cost: Vec<f64>,
    /// Frontier key: `cost` plus the heuristic estimate to the goal
    pub(super) priority: Vec<f64>,
    /// Predecessor on the best known path and the length of the segment used
    pub(super) parent: Vec<Option<(NodeIndex, f64)>>,
    /// Finalized nodes (Dijkstra, A*) or discovered nodes (BFS)
    closed: FixedBitSet,
    /// Nodes reported to the observer; survives reopening
    seen: FixedBitSet,
    visited: usize,
}

impl SearchSpace {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            cost: vec![f64::INFINITY; node_count],
            priority: vec![f64::INFINITY; node_count],
            parent: vec![None; node_count],
            closed: FixedBitSet::with_capacity(node_count),
            seen: FixedBitSet::with_capacity(node_count),
            visited: 0,
        }
    }

    pub(super) fn is_closed(&self, node: NodeIndex) -> bool {
        self.closed.contains(node.index())
    }

    /// Marks `node` closed, returning `false` if it already was.
    pub(super) fn close(&mut self, node: NodeIndex) -> bool {
        !self.closed.put(node.index())
    }

    /// Puts a finalized node back on the open list after a cheaper path to
    /// it turned up.
    pub(super) fn reopen(&mut self, node: NodeIndex) {
        self.closed.set(node.index(), false);
    }

    /// Counts `node` as visited, returning `false` if it already was.
    pub(super) fn record_visit(&mut self, node: NodeIndex) -> bool {
        if self.seen.put(node.index()) {
            return false;
        }
        self.visited += 1;
        true
    }

    pub(super) fn visited(&self) -> usize {
        self.visited
    }
}

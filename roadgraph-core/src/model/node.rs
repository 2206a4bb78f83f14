use hashbrown::HashSet;
use petgraph::{Direction, graph::NodeIndex};

use crate::model::{Coordinate, RoadEdge, graph::RoadNetwork};

/// Road intersection. Identity is the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoadNode<C> {
    location: C,
}

impl<C: Coordinate> RoadNode<C> {
    pub(crate) fn new(location: C) -> Self {
        Self { location }
    }

    pub fn location(&self) -> C {
        self.location
    }
}

/// Borrowed view of a node together with its outgoing roads
#[derive(Clone, Copy)]
pub struct NodeView<'a, C> {
    network: &'a RoadNetwork<C>,
    index: NodeIndex,
}

impl<'a, C: Coordinate> NodeView<'a, C> {
    pub(crate) fn new(network: &'a RoadNetwork<C>, index: NodeIndex) -> Self {
        Self { network, index }
    }

    pub fn location(&self) -> C {
        self.network[self.index].location
    }

    /// Outgoing road segments in insertion order
    pub fn outgoing(&self) -> Vec<&'a RoadEdge<C>> {
        // petgraph walks adjacency newest-first
        let mut edges: Vec<_> = self
            .network
            .edges_directed(self.index, Direction::Outgoing)
            .map(|edge| edge.weight())
            .collect();
        edges.reverse();
        edges
    }

    pub fn out_degree(&self) -> usize {
        self.network
            .edges_directed(self.index, Direction::Outgoing)
            .count()
    }

    /// Distinct locations reachable over one outgoing segment, ordered by
    /// the first segment that reaches each of them.
    pub fn neighbors(&self) -> Vec<C> {
        let location = self.location();
        let mut seen = HashSet::new();
        self.outgoing()
            .into_iter()
            .filter_map(|edge| edge.other_end(&location).ok())
            .filter(|neighbor| seen.insert(*neighbor))
            .collect()
    }
}

impl<C: Coordinate> PartialEq for NodeView<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.location() == other.location()
    }
}

impl<C: Coordinate> Eq for NodeView<'_, C> {}

impl<C: Coordinate> std::fmt::Debug for NodeView<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("location", &self.location())
            .field("out_degree", &self.out_degree())
            .finish()
    }
}

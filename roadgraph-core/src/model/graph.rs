//! Road network storage and construction

use hashbrown::HashMap;
use log::debug;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use crate::{EdgeId, Error};
use crate::model::{Coordinate, GeoPoint, NodeView, RoadEdge, RoadNode};

pub(crate) type RoadNetwork<C> = DiGraph<RoadNode<C>, RoadEdge<C>>;

/// Directed graph of intersections keyed by location.
///
/// Vertices must be added before any edge references them. Nothing is ever
/// removed, so node and edge indices stay stable for the lifetime of the
/// graph.
#[derive(Debug, Clone)]
pub struct RoadGraph<C = GeoPoint> {
    pub(crate) network: RoadNetwork<C>,
    index: HashMap<C, NodeIndex>,
}

impl<C: Coordinate> RoadGraph<C> {
    pub fn new() -> Self {
        Self {
            network: DiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Pre-allocate for a known network size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            network: DiGraph::with_capacity(node_count, edge_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Adds an intersection at `location`.
    ///
    /// Returns `false` and leaves the graph untouched if the location is
    /// already present.
    pub fn add_vertex(&mut self, location: C) -> bool {
        if self.index.contains_key(&location) {
            debug!("Vertex {location} already exists in graph");
            return false;
        }
        let node = self.network.add_node(RoadNode::new(location));
        self.index.insert(location, node);
        true
    }

    /// Adds a directed road segment from `from` to `to`.
    ///
    /// The segment is attached to `from` only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `length` is negative or not finite,
    /// and [`Error::UnknownVertex`] if either endpoint has not been added.
    /// The graph is unchanged on error.
    pub fn add_edge(
        &mut self,
        from: C,
        to: C,
        road_name: impl Into<String>,
        road_type: impl Into<String>,
        length: f64,
    ) -> Result<EdgeId, Error> {
        let (source, target) = self.validate_segment(&from, &to, length)?;
        let edge = RoadEdge::new(from, to, road_name.into(), road_type.into(), length);
        Ok(self.network.add_edge(source, target, edge))
    }

    /// Adds a road that can be driven both ways, as two directed segments.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RoadGraph::add_edge`]. Neither segment is
    /// inserted on error.
    pub fn add_two_way_road(
        &mut self,
        a: C,
        b: C,
        road_name: impl Into<String>,
        road_type: impl Into<String>,
        length: f64,
    ) -> Result<(EdgeId, EdgeId), Error> {
        let (na, nb) = self.validate_segment(&a, &b, length)?;
        let road_name = road_name.into();
        let road_type = road_type.into();
        let forward = self.network.add_edge(
            na,
            nb,
            RoadEdge::new(a, b, road_name.clone(), road_type.clone(), length),
        );
        let backward = self
            .network
            .add_edge(nb, na, RoadEdge::new(b, a, road_name, road_type, length));
        Ok((forward, backward))
    }

    fn validate_segment(
        &self,
        from: &C,
        to: &C,
        length: f64,
    ) -> Result<(NodeIndex, NodeIndex), Error> {
        if !length.is_finite() || length < 0.0 {
            return Err(Error::InvalidLength(length));
        }
        let source = self
            .node_index(from)
            .ok_or_else(|| Error::UnknownVertex(from.to_string()))?;
        let target = self
            .node_index(to)
            .ok_or_else(|| Error::UnknownVertex(to.to_string()))?;
        Ok((source, target))
    }

    pub fn vertex_count(&self) -> usize {
        self.network.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.network.edge_count()
    }

    pub fn contains_vertex(&self, location: &C) -> bool {
        self.index.contains_key(location)
    }

    /// Vertex locations in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = C> + '_ {
        self.network.node_weights().map(RoadNode::location)
    }

    /// Every road segment in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &RoadEdge<C>> {
        self.network.edge_weights()
    }

    pub fn edge(&self, id: EdgeId) -> Option<&RoadEdge<C>> {
        self.network.edge_weight(id)
    }

    /// Mutable access to a segment's road metadata. Endpoints and length
    /// are fixed once inserted.
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut RoadEdge<C>> {
        self.network.edge_weight_mut(id)
    }

    pub fn node(&self, location: &C) -> Option<NodeView<'_, C>> {
        self.node_index(location)
            .map(|index| NodeView::new(&self.network, index))
    }

    /// Locations directly reachable from `location`
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `location` is not in the graph.
    pub fn neighbors(&self, location: &C) -> Result<Vec<C>, Error> {
        self.node(location)
            .map(|node| node.neighbors())
            .ok_or_else(|| Error::UnknownVertex(location.to_string()))
    }

    pub(crate) fn node_index(&self, location: &C) -> Option<NodeIndex> {
        self.index.get(location).copied()
    }

    pub(crate) fn location(&self, node: NodeIndex) -> C {
        self.network[node].location()
    }

    /// `(target, length)` for every segment leaving `node`
    pub(crate) fn outgoing(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.network
            .edges_directed(node, Direction::Outgoing)
            .map(|edge| (edge.target(), edge.weight().length()))
    }
}

impl<C: Coordinate> Default for RoadGraph<C> {
    fn default() -> Self {
        Self::new()
    }
}

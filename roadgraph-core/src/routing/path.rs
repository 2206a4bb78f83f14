use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

use super::state::SearchSpace;
use crate::Error;
use crate::model::{Coordinate, RoadGraph};

/// A route found by one of the searches.
///
/// Never empty: deserialization rejects a route without locations or with a
/// negative or non-finite cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RouteData<C>")]
pub struct Route<C> {
    path: Vec<C>,
    cost: f64,
    nodes_visited: usize,
}

#[derive(Deserialize)]
struct RouteData<C> {
    path: Vec<C>,
    cost: f64,
    nodes_visited: usize,
}

impl<C> TryFrom<RouteData<C>> for Route<C> {
    type Error = Error;

    fn try_from(data: RouteData<C>) -> Result<Self, Self::Error> {
        if data.path.is_empty() {
            return Err(Error::InvalidRoute("path has no locations".into()));
        }
        if !data.cost.is_finite() || data.cost < 0.0 {
            return Err(Error::InvalidRoute(format!(
                "cost must be finite and non-negative, got {}",
                data.cost
            )));
        }
        Ok(Self {
            path: data.path,
            cost: data.cost,
            nodes_visited: data.nodes_visited,
        })
    }
}

impl<C: Coordinate> Route<C> {
    /// Locations from start to goal, both included
    pub fn path(&self) -> &[C] {
        &self.path
    }

    pub fn into_path(self) -> Vec<C> {
        self.path
    }

    /// Sum of the lengths of the traversed segments
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of road segments on the route
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }

    /// How many distinct nodes the search expanded, the goal included:
    /// finalized nodes for Dijkstra and A*, dequeued nodes for BFS
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn start(&self) -> C {
        self.path[0]
    }

    pub fn goal(&self) -> C {
        self.path[self.path.len() - 1]
    }
}

/// Walk parent pointers from `goal` back to `start`.
pub(super) fn reconstruct_route<C: Coordinate>(
    graph: &RoadGraph<C>,
    space: &SearchSpace,
    start: NodeIndex,
    goal: NodeIndex,
) -> Route<C> {
    let mut path = Vec::new();
    let mut cost = 0.0;
    let mut current = goal;

    while current != start {
        path.push(graph.location(current));
        match space.parent[current.index()] {
            Some((parent, length)) => {
                cost += length;
                current = parent;
            }
            // Every closed node but the start has a parent
            None => break,
        }
    }
    path.push(graph.location(start));
    path.reverse();

    Route {
        path,
        cost,
        nodes_visited: space.visited(),
    }
}

//! Path search over a [`RoadGraph`]

pub mod astar;
pub mod batch;
pub mod bfs;
pub mod dijkstra;
pub mod observer;
pub mod path;
mod state;

use std::fmt;

use petgraph::graph::NodeIndex;

pub use astar::{astar, astar_with_heuristic};
pub use batch::route_many;
pub use bfs::breadth_first_search;
pub use dijkstra::dijkstra;
pub use observer::{SearchObserver, VisitLog};
pub use path::Route;

use crate::{Error, SearchConfig, model::Coordinate, model::RoadGraph};

/// Search strategy, for callers that pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    BreadthFirst,
    Dijkstra,
    AStar,
}

impl SearchAlgorithm {
    /// Runs this strategy
    ///
    /// # Errors
    ///
    /// See [`breadth_first_search`], [`dijkstra()`] and [`astar()`].
    pub fn run<C, O>(
        self,
        graph: &RoadGraph<C>,
        start: &C,
        goal: &C,
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<Option<Route<C>>, Error>
    where
        C: Coordinate,
        O: SearchObserver<C> + ?Sized,
    {
        match self {
            Self::BreadthFirst => breadth_first_search(graph, start, goal, config, observer),
            Self::Dijkstra => dijkstra(graph, start, goal, config, observer),
            Self::AStar => astar(graph, start, goal, config, observer),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "BFS"),
            Self::Dijkstra => write!(f, "Dijkstra"),
            Self::AStar => write!(f, "A*"),
        }
    }
}

fn resolve_endpoints<C: Coordinate>(
    graph: &RoadGraph<C>,
    start: &C,
    goal: &C,
) -> Result<(NodeIndex, NodeIndex), Error> {
    let start_node = graph
        .node_index(start)
        .ok_or_else(|| Error::UnknownStart(start.to_string()))?;
    let goal_node = graph
        .node_index(goal)
        .ok_or_else(|| Error::UnknownGoal(goal.to_string()))?;
    Ok((start_node, goal_node))
}

/// Shorthands with default limits and no observer
impl<C: Coordinate> RoadGraph<C> {
    /// # Errors
    ///
    /// See [`breadth_first_search`].
    pub fn bfs(&self, start: &C, goal: &C) -> Result<Option<Route<C>>, Error> {
        breadth_first_search(self, start, goal, &SearchConfig::default(), &mut |_: &C| {})
    }

    /// # Errors
    ///
    /// See [`dijkstra()`].
    pub fn dijkstra(&self, start: &C, goal: &C) -> Result<Option<Route<C>>, Error> {
        dijkstra(self, start, goal, &SearchConfig::default(), &mut |_: &C| {})
    }

    /// # Errors
    ///
    /// See [`astar()`].
    pub fn astar(&self, start: &C, goal: &C) -> Result<Option<Route<C>>, Error> {
        astar(self, start, goal, &SearchConfig::default(), &mut |_: &C| {})
    }

    /// # Errors
    ///
    /// See [`breadth_first_search`].
    pub fn bfs_with<O>(
        &self,
        start: &C,
        goal: &C,
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<Option<Route<C>>, Error>
    where
        O: SearchObserver<C> + ?Sized,
    {
        breadth_first_search(self, start, goal, config, observer)
    }

    /// # Errors
    ///
    /// See [`dijkstra()`].
    pub fn dijkstra_with<O>(
        &self,
        start: &C,
        goal: &C,
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<Option<Route<C>>, Error>
    where
        O: SearchObserver<C> + ?Sized,
    {
        dijkstra(self, start, goal, config, observer)
    }

    /// # Errors
    ///
    /// See [`astar()`].
    pub fn astar_with<O>(
        &self,
        start: &C,
        goal: &C,
        config: &SearchConfig,
        observer: &mut O,
    ) -> Result<Option<Route<C>>, Error>
    where
        O: SearchObserver<C> + ?Sized,
    {
        astar(self, start, goal, config, observer)
    }
}

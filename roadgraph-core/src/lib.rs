//! Directed road-network graph with breadth-first, Dijkstra and A* route
//! search.
//!
//! Intersections are keyed by their location ([`Coordinate`]); road segments
//! are directed and carry a road name, a road class and a non-negative length.
//! Searches never mutate the graph, so a built [`RoadGraph`] can be shared
//! between threads and queried concurrently.
//!
//! ```
//! use roadgraph_core::prelude::*;
//!
//! let mut graph = RoadGraph::new();
//! let a = PlanarPoint::new(0.0, 0.0)?;
//! let b = PlanarPoint::new(1.0, 0.0)?;
//! graph.add_vertex(a);
//! graph.add_vertex(b);
//! graph.add_edge(a, b, "Main St", "residential", 1.0)?;
//!
//! let route = graph.dijkstra(&a, &b)?.expect("b is reachable");
//! assert_eq!(route.path(), [a, b]);
//! # Ok::<(), roadgraph_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod routing;

pub use config::SearchConfig;
pub use error::Error;
pub use model::{Coordinate, GeoPoint, NodeView, PlanarPoint, RoadEdge, RoadGraph, RoadNode};
pub use routing::{
    Route, SearchAlgorithm, SearchObserver, VisitLog, astar, astar_with_heuristic,
    breadth_first_search, dijkstra, route_many,
};

/// Stable handle of a road segment inside its graph
pub type EdgeId = petgraph::graph::EdgeIndex;

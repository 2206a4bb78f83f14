//! Road network model: locations, intersections and road segments

pub mod coordinate;
pub mod edge;
pub mod graph;
pub mod node;

pub use coordinate::{Coordinate, GeoPoint, PlanarPoint};
pub use edge::RoadEdge;
pub use graph::RoadGraph;
pub use node::{NodeView, RoadNode};

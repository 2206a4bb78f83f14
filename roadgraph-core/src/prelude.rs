// Re-export key components
pub use crate::config::SearchConfig;
pub use crate::error::Error;
pub use crate::model::{Coordinate, GeoPoint, PlanarPoint, RoadEdge, RoadGraph};
pub use crate::routing::{Route, SearchAlgorithm, SearchObserver, VisitLog, route_many};

// Road segment handle
pub use crate::EdgeId;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Vertex {0} has not been added to the graph")]
    UnknownVertex(String),
    #[error("Start vertex {0} is not in the graph")]
    UnknownStart(String),
    #[error("Goal vertex {0} is not in the graph")]
    UnknownGoal(String),
    #[error("Road length must be a finite non-negative number, got {0}")]
    InvalidLength(f64),
    #[error("Location {0} is not an endpoint of this edge")]
    NotAnEndpoint(String),
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid route: {0}")]
    InvalidRoute(String),
}

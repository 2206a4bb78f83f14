use std::fmt;

use crate::Error;
use crate::model::Coordinate;

/// Directed road segment, traversable only from `from` to `to`.
///
/// Two-way roads are two segments, one per direction.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge<C> {
    from: C,
    to: C,
    road_name: String,
    road_type: String,
    /// Segment length, same unit as `Coordinate::distance_to`
    length: f64,
}

impl<C: Coordinate> RoadEdge<C> {
    pub(crate) fn new(from: C, to: C, road_name: String, road_type: String, length: f64) -> Self {
        Self {
            from,
            to,
            road_name,
            road_type,
            length,
        }
    }

    pub fn from(&self) -> C {
        self.from
    }

    pub fn to(&self) -> C {
        self.to
    }

    pub fn road_name(&self) -> &str {
        &self.road_name
    }

    pub fn road_type(&self) -> &str {
        &self.road_type
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_road_name(&mut self, road_name: impl Into<String>) {
        self.road_name = road_name.into();
    }

    pub fn set_road_type(&mut self, road_type: impl Into<String>) {
        self.road_type = road_type.into();
    }

    /// Returns the endpoint opposite to `location`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnEndpoint`] if `location` is neither endpoint.
    pub fn other_end(&self, location: &C) -> Result<C, Error> {
        if *location == self.from {
            Ok(self.to)
        } else if *location == self.to {
            Ok(self.from)
        } else {
            Err(Error::NotAnEndpoint(location.to_string()))
        }
    }
}

impl<C: Coordinate> fmt::Display for RoadEdge<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} -> {}, {}",
            self.road_name, self.road_type, self.from, self.to, self.length
        )
    }
}

//! Vertex keys: locations with a distance metric

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use geo::{Distance, Euclidean, Haversine, Point};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A location that can key a graph vertex.
///
/// `distance_to` doubles as the A* heuristic, so for optimal A* routes it must
/// never exceed the length of any road path between the two points.
pub trait Coordinate: Copy + Eq + Hash + Debug + Display {
    /// Straight-line distance to `other`, never negative.
    fn distance_to(&self, other: &Self) -> f64;
}

fn checked(value: f64, what: &str) -> Result<OrderedFloat<f64>, Error> {
    if value.is_finite() {
        // Normalize -0.0 so equal points hash identically
        Ok(OrderedFloat(value + 0.0))
    } else {
        Err(Error::InvalidCoordinate(format!("{what} must be finite, got {value}")))
    }
}

/// Geographic point in degrees. Distances are great-circle kilometres.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
    lat: OrderedFloat<f64>,
    lon: OrderedFloat<f64>,
}

impl GeoPoint {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for non-finite components,
    /// latitudes outside `[-90, 90]` or longitudes outside `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, Error> {
        let lat = checked(lat, "latitude")?;
        let lon = checked(lon, "longitude")?;
        if lat.0.abs() > 90.0 {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                lat.0
            )));
        }
        if lon.0.abs() > 180.0 {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                lon.0
            )));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat.0
    }

    pub fn lon(&self) -> f64 {
        self.lon.0
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon.0, self.lat.0)
    }
}

impl Coordinate for GeoPoint {
    fn distance_to(&self, other: &Self) -> f64 {
        Haversine.distance(self.to_point(), other.to_point()) / 1000.0
    }
}

impl TryFrom<(f64, f64)> for GeoPoint {
    type Error = Error;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(lat, lon)
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(point: GeoPoint) -> Self {
        (point.lat.0, point.lon.0)
    }
}

impl Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat.0, self.lon.0)
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat.0, self.lon.0)
    }
}

/// Point on a flat plane with Euclidean distance, in the same unit as road
/// lengths.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct PlanarPoint {
    x: OrderedFloat<f64>,
    y: OrderedFloat<f64>,
}

impl PlanarPoint {
    /// # Errors
    ///
    /// Returns [`Error::InvalidCoordinate`] for non-finite components.
    pub fn new(x: f64, y: f64) -> Result<Self, Error> {
        Ok(Self {
            x: checked(x, "x")?,
            y: checked(y, "y")?,
        })
    }

    pub fn x(&self) -> f64 {
        self.x.0
    }

    pub fn y(&self) -> f64 {
        self.y.0
    }
}

impl Coordinate for PlanarPoint {
    fn distance_to(&self, other: &Self) -> f64 {
        Euclidean.distance(
            Point::new(self.x.0, self.y.0),
            Point::new(other.x.0, other.y.0),
        )
    }
}

impl TryFrom<(f64, f64)> for PlanarPoint {
    type Error = Error;

    fn try_from((x, y): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(x, y)
    }
}

impl From<PlanarPoint> for (f64, f64) {
    fn from(point: PlanarPoint) -> Self {
        (point.x.0, point.y.0)
    }
}

impl Debug for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlanarPoint({}, {})", self.x.0, self.y.0)
    }
}

impl Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x.0, self.y.0)
    }
}

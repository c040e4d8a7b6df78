use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Geometry, Polygon, Position};

/// A single position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub coordinates: Position,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl Point {
    #[must_use]
    pub fn new(coordinates: Position) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }
}

/// An open sequence of positions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineString {
    pub coordinates: Vec<Position>,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl LineString {
    #[must_use]
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPoint {
    pub coordinates: Vec<Position>,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl MultiPoint {
    #[must_use]
    pub fn new(coordinates: Vec<Position>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }
}

/// Several line strings; also the output of cutting a line at the antimeridian.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiLineString {
    pub coordinates: Vec<Vec<Position>>,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl MultiLineString {
    #[must_use]
    pub fn new(coordinates: Vec<Vec<Position>>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }
}

/// Several polygons, each given as its list of rings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiPolygon {
    pub coordinates: Vec<Vec<Vec<Position>>>,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl MultiPolygon {
    #[must_use]
    pub fn new(coordinates: Vec<Vec<Vec<Position>>>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Builds a multi-polygon from polygon values, in order.
    #[must_use]
    pub fn from_polygons(polygons: impl IntoIterator<Item = Polygon>) -> Self {
        Self {
            coordinates: polygons.into_iter().map(|p| p.coordinates).collect(),
            crs: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    /// Legacy coordinate reference system member, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl GeometryCollection {
    #[must_use]
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self {
            geometries,
            crs: None,
        }
    }
}

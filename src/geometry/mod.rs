//! GeoJSON object model.
//!
//! Geometry variants form a closed enum; every consumer dispatches with an
//! exhaustive `match`.

pub mod feature;
pub mod polygon;
pub mod position;
pub mod shapes;

pub use feature::{Feature, FeatureCollection, FeatureId, GeoJson};
pub use polygon::Polygon;
pub use position::Position;
pub use shapes::{GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A closed sequence of positions bounding a polygon or a hole.
pub type Ring = Vec<Position>;

/// Any GeoJSON geometry, tagged by its `"type"` member on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The RFC 7946 type name of this geometry.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
            Self::MultiPoint(_) => "MultiPoint",
            Self::MultiLineString(_) => "MultiLineString",
            Self::MultiPolygon(_) => "MultiPolygon",
            Self::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// The legacy `crs` member of this geometry, if present.
    #[must_use]
    pub fn crs(&self) -> Option<&Value> {
        match self {
            Self::Point(g) => g.crs.as_ref(),
            Self::LineString(g) => g.crs.as_ref(),
            Self::Polygon(g) => g.crs.as_ref(),
            Self::MultiPoint(g) => g.crs.as_ref(),
            Self::MultiLineString(g) => g.crs.as_ref(),
            Self::MultiPolygon(g) => g.crs.as_ref(),
            Self::GeometryCollection(g) => g.crs.as_ref(),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_variant!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

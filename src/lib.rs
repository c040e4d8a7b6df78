//! GeoJSON object model with an RFC 7946 compliance engine: polygon winding
//! order and antimeridian cutting.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod options;

pub use error::{GeoJsonError, Result};
pub use geometry::{
    Feature, FeatureCollection, FeatureId, GeoJson, Geometry, GeometryCollection, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position, Ring,
};
pub use operations::ComplianceProcessor;
pub use options::ProcessingOptions;

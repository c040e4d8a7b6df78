//! Operations over the GeoJSON model.

pub mod cut;
mod process;

pub use cut::{Cut, LineCutter, PolygonCutter, RingCutter, RingHalves};
pub use process::ComplianceProcessor;

use std::fmt;

use thiserror::Error;

/// Top-level error type for GeoJSON processing.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    Orientation(#[from] OrientationError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Names the ring an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingRole {
    /// A ring outside of any polygon context.
    Ring,
    /// The exterior ring of a polygon (index 0).
    Exterior,
    /// An interior ring (hole), numbered from 1 like its polygon index.
    Interior(usize),
}

impl RingRole {
    /// The role of the ring at `index` within a polygon's ring list.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            Self::Exterior
        } else {
            Self::Interior(index)
        }
    }
}

impl fmt::Display for RingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ring => f.write_str("Ring"),
            Self::Exterior => f.write_str("Exterior ring"),
            Self::Interior(index) => write!(f, "Interior ring {index}"),
        }
    }
}

/// Errors for rings that are missing points or are not closed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    #[error("{role} must have at least {required} points, got {actual}")]
    TooFewPoints {
        role: RingRole,
        required: usize,
        actual: usize,
    },

    #[error("{role} must be closed (first and last points must be the same)")]
    NotClosed { role: RingRole },
}

/// Right-hand rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrientationError {
    #[error("Exterior ring must be counterclockwise according to RFC 7946")]
    Exterior,

    #[error("Interior ring {index} must be clockwise according to RFC 7946")]
    Interior { index: usize },
}

/// Convenience type alias for results using [`GeoJsonError`].
pub type Result<T> = std::result::Result<T, GeoJsonError>;

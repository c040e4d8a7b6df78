//! Antimeridian cutting.
//!
//! Cutters borrow their input and never modify it. When nothing crosses,
//! the result hands back the very input that was passed in.

mod line;
mod polygon;
mod ring;

pub use line::LineCutter;
pub use polygon::PolygonCutter;
pub use ring::{RingCutter, RingHalves};

/// Outcome of a cut: the untouched input, or the pieces it was split into.
#[derive(Debug, Clone, PartialEq)]
pub enum Cut<'a, T: ?Sized, S> {
    Unchanged(&'a T),
    Split(S),
}

impl<T: ?Sized, S> Cut<'_, T, S> {
    #[must_use]
    pub fn is_split(&self) -> bool {
        matches!(self, Self::Split(_))
    }

    /// The pieces, if the input was split.
    #[must_use]
    pub fn split(self) -> Option<S> {
        match self {
            Self::Unchanged(_) => None,
            Self::Split(pieces) => Some(pieces),
        }
    }
}

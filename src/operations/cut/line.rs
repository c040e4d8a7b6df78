use super::Cut;
use crate::geometry::{MultiLineString, Position};
use crate::math::antimeridian::{crosses_antimeridian, crossing_longitude, interpolate_latitude};

/// Splits an open line at every antimeridian crossing.
pub struct LineCutter<'a> {
    coordinates: &'a [Position],
}

impl<'a> LineCutter<'a> {
    /// Creates a new `LineCutter` over a line's coordinates.
    #[must_use]
    pub fn new(coordinates: &'a [Position]) -> Self {
        Self { coordinates }
    }

    /// Executes the cut.
    ///
    /// Each crossing ends the current segment on the antimeridian at the
    /// interpolated latitude and starts the next segment at the same
    /// latitude on the opposite side. Lines with fewer than two points, or
    /// without a crossing, come back as [`Cut::Unchanged`].
    #[must_use]
    pub fn execute(&self) -> Cut<'a, [Position], MultiLineString> {
        let Some((first, _)) = self.coordinates.split_first() else {
            return Cut::Unchanged(self.coordinates);
        };

        let mut segments = Vec::new();
        let mut current = vec![first.clone()];
        for pair in self.coordinates.windows(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            if crosses_antimeridian(p1, p2) {
                let latitude = interpolate_latitude(p1, p2);
                let side = crossing_longitude(p1.longitude, p2.longitude);
                current.push(Position::new(side, latitude));
                segments.push(std::mem::take(&mut current));
                current.push(Position::new(-side, latitude));
            }
            current.push(p2.clone());
        }

        if segments.is_empty() {
            return Cut::Unchanged(self.coordinates);
        }
        segments.push(current);
        tracing::debug!(segments = segments.len(), "cut line at antimeridian");
        Cut::Split(MultiLineString::new(segments))
    }
}

use super::Cut;
use crate::geometry::{Position, Ring};
use crate::math::antimeridian::{
    crosses_antimeridian, interpolate_latitude, normalize_longitude, ring_crosses_antimeridian,
};
use crate::math::orientation::close_ring;
use crate::math::ANTIMERIDIAN;

/// The two closed rings a crossing ring is split into.
#[derive(Debug, Clone, PartialEq)]
pub struct RingHalves {
    /// Vertices with normalized longitude `>= 0`, bounded by +180.
    pub east: Ring,
    /// Vertices with negative normalized longitude, bounded by -180.
    pub west: Ring,
}

impl RingHalves {
    fn push_vertex(&mut self, p: &Position) {
        let longitude = normalize_longitude(p.longitude);
        let half = if longitude >= 0.0 {
            &mut self.east
        } else {
            &mut self.west
        };
        half.push(p.at_longitude(longitude));
    }

    fn push_crossing(&mut self, latitude: f64) {
        self.east.push(Position::new(ANTIMERIDIAN, latitude));
        self.west.push(Position::new(-ANTIMERIDIAN, latitude));
    }
}

/// Splits a closed ring into an eastern and a western ring along the
/// antimeridian.
pub struct RingCutter<'a> {
    ring: &'a [Position],
}

impl<'a> RingCutter<'a> {
    /// Creates a new `RingCutter`.
    #[must_use]
    pub fn new(ring: &'a [Position]) -> Self {
        Self { ring }
    }

    /// Executes the cut.
    ///
    /// Every vertex goes to the half its normalized longitude lies in; each
    /// crossing adds an intersection at +180 to the east half and at -180 to
    /// the west half. Both halves are closed afterwards. Rings without a
    /// crossing come back as [`Cut::Unchanged`].
    #[must_use]
    pub fn execute(&self) -> Cut<'a, [Position], RingHalves> {
        if !ring_crosses_antimeridian(self.ring) {
            return Cut::Unchanged(self.ring);
        }

        let mut halves = RingHalves {
            east: Vec::new(),
            west: Vec::new(),
        };
        for pair in self.ring.windows(2) {
            let (p1, p2) = (&pair[0], &pair[1]);
            halves.push_vertex(p1);
            if crosses_antimeridian(p1, p2) {
                halves.push_crossing(interpolate_latitude(p1, p2));
            }
        }
        if let Some(last) = self.ring.last() {
            halves.push_vertex(last);
        }

        for half in [&mut halves.east, &mut halves.west] {
            if let Err(err) = close_ring(half) {
                tracing::debug!(%err, "leaving ring half open");
            }
        }
        Cut::Split(halves)
    }
}

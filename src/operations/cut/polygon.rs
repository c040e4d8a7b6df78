use super::{Cut, RingCutter, RingHalves};
use crate::geometry::{MultiPolygon, Polygon};
use crate::math::antimeridian::{circular_mean_longitude, rings_cross_antimeridian};

/// Splits a polygon that crosses the antimeridian into an eastern and a
/// western polygon.
///
/// Only the exterior ring decides whether a split happens. Holes that do not
/// cross are assigned whole to the side of their circular mean longitude,
/// which is a heuristic rather than a containment test: a hole spanning a
/// wide range of longitudes can land on the wrong side.
pub struct PolygonCutter<'a> {
    polygon: &'a Polygon,
}

impl<'a> PolygonCutter<'a> {
    /// Creates a new `PolygonCutter`.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the cut, producing `[east, west]` as a multi-polygon.
    ///
    /// The polygon comes back as [`Cut::Unchanged`] when it has no exterior
    /// ring, when no ring crosses, or when the exterior ring itself does not
    /// split (crossing holes are then left as they are).
    #[must_use]
    pub fn execute(&self) -> Cut<'a, Polygon, MultiPolygon> {
        let rings = &self.polygon.coordinates;
        let Some(exterior) = self.polygon.exterior() else {
            return Cut::Unchanged(self.polygon);
        };
        if !rings_cross_antimeridian(rings) {
            return Cut::Unchanged(self.polygon);
        }
        let Cut::Split(RingHalves { east, west }) = RingCutter::new(exterior).execute() else {
            tracing::debug!("only holes cross the antimeridian; polygon left whole");
            return Cut::Unchanged(self.polygon);
        };

        let mut east = vec![east];
        let mut west = vec![west];
        for hole in self.polygon.interiors() {
            match RingCutter::new(hole).execute() {
                Cut::Split(halves) => {
                    east.push(halves.east);
                    west.push(halves.west);
                }
                Cut::Unchanged(hole) => {
                    if circular_mean_longitude(hole) > 0.0 {
                        east.push(hole.to_vec());
                    } else {
                        west.push(hole.to_vec());
                    }
                }
            }
        }

        tracing::debug!(
            east_holes = east.len() - 1,
            west_holes = west.len() - 1,
            "cut polygon at antimeridian"
        );
        Cut::Split(MultiPolygon::from_polygons([
            Polygon::new(east),
            Polygon::new(west),
        ]))
    }
}

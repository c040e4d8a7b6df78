//! Longitude arithmetic around the antimeridian.
//!
//! A segment crosses the antimeridian when its normalized endpoints are more
//! than 180 degrees apart: the short way between them passes through ±180.

use super::{Vector2, ANTIMERIDIAN, TOLERANCE};
use crate::geometry::{Position, Ring};

/// Reduces a longitude to `(-180, 180]`.
///
/// The antimeridian has the single representation `180`, so a vertex lying
/// on it is never more than 180 degrees from a vertex in the eastern
/// hemisphere.
#[must_use]
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = longitude % 360.0;
    if wrapped > ANTIMERIDIAN {
        wrapped - 360.0
    } else if wrapped <= -ANTIMERIDIAN {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Returns `true` if the segment `p1 → p2` crosses the antimeridian.
#[must_use]
pub fn crosses_antimeridian(p1: &Position, p2: &Position) -> bool {
    let lon1 = normalize_longitude(p1.longitude);
    let lon2 = normalize_longitude(p2.longitude);
    (lon1 - lon2).abs() > ANTIMERIDIAN
}

/// The side of the antimeridian a segment leaves from: `+180` when it goes
/// from positive to negative longitude, `-180` the other way.
///
/// For a segment that does not cross, the sign of `lon1` picks the side.
#[must_use]
pub fn crossing_longitude(lon1: f64, lon2: f64) -> f64 {
    let lon1 = normalize_longitude(lon1);
    let lon2 = normalize_longitude(lon2);
    if (lon1 - lon2).abs() > ANTIMERIDIAN {
        if lon1 > 0.0 && lon2 < 0.0 {
            ANTIMERIDIAN
        } else {
            -ANTIMERIDIAN
        }
    } else if lon1 >= 0.0 {
        ANTIMERIDIAN
    } else {
        -ANTIMERIDIAN
    }
}

/// Latitude at which the segment `p1 → p2` meets the antimeridian.
///
/// The endpoint on the far side of the cut is shifted by 360 degrees so the
/// segment is continuous; the cut then sits at +180 and the latitude is
/// interpolated linearly. The fraction is clamped to `[0, 1]`, and a
/// segment with no longitude span yields the midpoint.
#[must_use]
pub fn interpolate_latitude(p1: &Position, p2: &Position) -> f64 {
    let lon1 = normalize_longitude(p1.longitude);
    let lon2 = normalize_longitude(p2.longitude);

    let (lon1, lon2, cut) = if lon1 > 0.0 && lon2 < 0.0 {
        (lon1, lon2 + 360.0, ANTIMERIDIAN)
    } else if lon1 < 0.0 && lon2 > 0.0 {
        (lon1 + 360.0, lon2, ANTIMERIDIAN)
    } else {
        (lon1, lon2, crossing_longitude(lon1, lon2))
    };

    let span = lon2 - lon1;
    let fraction = if span.abs() < TOLERANCE {
        0.5
    } else {
        ((cut - lon1) / span).abs().clamp(0.0, 1.0)
    };
    p1.latitude + fraction * (p2.latitude - p1.latitude)
}

/// Mean longitude of a ring, averaged on the unit circle so that rings
/// straddling ±180 average near ±180 rather than near 0.
///
/// Returns 0 for an empty ring.
#[must_use]
pub fn circular_mean_longitude(ring: &[Position]) -> f64 {
    if ring.is_empty() {
        return 0.0;
    }
    let sum: Vector2 = ring
        .iter()
        .map(|p| {
            let radians = normalize_longitude(p.longitude).to_radians();
            Vector2::new(radians.cos(), radians.sin())
        })
        .sum();
    normalize_longitude(sum.y.atan2(sum.x).to_degrees())
}

/// Returns `true` if any segment of the ring crosses the antimeridian.
#[must_use]
pub fn ring_crosses_antimeridian(ring: &[Position]) -> bool {
    ring.windows(2)
        .any(|pair| crosses_antimeridian(&pair[0], &pair[1]))
}

/// Returns `true` if any ring crosses the antimeridian.
#[must_use]
pub fn rings_cross_antimeridian(rings: &[Ring]) -> bool {
    rings.iter().any(|ring| ring_crosses_antimeridian(ring))
}

//! Ring winding order: the right-hand rule of RFC 7946.
//!
//! Exterior rings are counterclockwise, interior rings clockwise. Winding is
//! decided by the sign of a shoelace sum taken in longitude/latitude order.

use std::borrow::Cow;

use crate::error::{OrientationError, Result, RingError, RingRole};
use crate::geometry::{Position, Ring};

/// Shoelace sum `Σ (x[i+1] - x[i]) * (y[i+1] + y[i])` over consecutive vertices,
/// including the edge from the last vertex back to the first.
///
/// Negative for counterclockwise rings. The sign is the opposite of the
/// usual `x0*y1 - x1*y0` form. The closing edge contributes nothing to a
/// closed ring and completes the cycle of one left open by [`reverse_ring`].
fn shoelace_sum(ring: &[Position]) -> f64 {
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(a, b)| {
            let (a, b) = (a.xy(), b.xy());
            (b.x - a.x) * (b.y + a.y)
        })
        .sum()
}

/// Returns `true` if the ring winds counterclockwise.
///
/// # Errors
///
/// Returns [`RingError::TooFewPoints`] if the ring has fewer than four points
/// (three distinct vertices plus closure).
pub fn is_counter_clockwise(ring: &[Position]) -> std::result::Result<bool, RingError> {
    if ring.len() < 4 {
        return Err(RingError::TooFewPoints {
            role: RingRole::Ring,
            required: 4,
            actual: ring.len(),
        });
    }
    Ok(shoelace_sum(ring) < 0.0)
}

/// Reverses the winding of a ring in place.
///
/// The final vertex is kept where it is and the vertices before it are
/// reversed, so `[a, b, c, d, a]` becomes `[d, c, b, a, a]`: the ring starts
/// at a new vertex and ends with a repeated one. Rings of one vertex or
/// fewer are untouched.
pub fn reverse_ring(ring: &mut [Position]) {
    if ring.len() <= 1 {
        return;
    }
    let last = ring.len() - 1;
    ring[..last].reverse();
}

/// Whether closing `ring` requires appending its first vertex.
fn needs_closing(ring: &[Position]) -> std::result::Result<bool, RingError> {
    match ring {
        [] => Ok(false),
        [_] | [_, _] => Err(RingError::TooFewPoints {
            role: RingRole::Ring,
            required: 3,
            actual: ring.len(),
        }),
        [first, .., last] => Ok(!first.same_location(last)),
    }
}

/// Returns the ring closed, appending a copy of its first vertex if needed.
///
/// A borrowed ring that needs closing is copied into a new owned ring; an
/// owned ring is extended in place. Already-closed and empty rings come
/// back untouched.
///
/// # Errors
///
/// Returns [`RingError::TooFewPoints`] for rings of one or two points.
pub fn ensure_ring_closed<'a>(
    ring: impl Into<Cow<'a, [Position]>>,
) -> std::result::Result<Cow<'a, [Position]>, RingError> {
    let mut ring = ring.into();
    if needs_closing(&ring)? {
        let first = ring[0].clone();
        ring.to_mut().push(first);
    }
    Ok(ring)
}

/// Closes an owned ring in place.
///
/// # Errors
///
/// Returns [`RingError::TooFewPoints`] for rings of one or two points.
pub fn close_ring(ring: &mut Ring) -> std::result::Result<(), RingError> {
    if needs_closing(ring)? {
        let first = ring[0].clone();
        ring.push(first);
    }
    Ok(())
}

/// Checks that a ring has at least four points and that its first and last
/// points coincide.
///
/// # Errors
///
/// Returns [`RingError::TooFewPoints`] or [`RingError::NotClosed`], naming
/// the ring by `role`.
pub fn validate_ring_closed(ring: &[Position], role: RingRole) -> std::result::Result<(), RingError> {
    match ring {
        [first, _, _, .., last] => {
            if first.same_location(last) {
                Ok(())
            } else {
                Err(RingError::NotClosed { role })
            }
        }
        _ => Err(RingError::TooFewPoints {
            role,
            required: 4,
            actual: ring.len(),
        }),
    }
}

/// Checks the right-hand rule: ring 0 counterclockwise, every other ring
/// clockwise.
///
/// Each ring is judged as if closed; the input is not modified. An empty
/// ring list is valid.
///
/// # Errors
///
/// Returns a [`RingError`] for rings with fewer than four points, or an
/// [`OrientationError`] naming the first ring with the wrong winding.
pub fn validate_orientation(rings: &[Ring]) -> Result<()> {
    for (index, ring) in rings.iter().enumerate() {
        let role = RingRole::for_index(index);
        if ring.len() < 4 {
            return Err(RingError::TooFewPoints {
                role,
                required: 4,
                actual: ring.len(),
            }
            .into());
        }
        let closed = ensure_ring_closed(ring.as_slice())?;
        let ccw = is_counter_clockwise(&closed)?;
        match role {
            RingRole::Exterior if !ccw => return Err(OrientationError::Exterior.into()),
            RingRole::Interior(index) if ccw => {
                return Err(OrientationError::Interior { index }.into())
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rewrites rings to follow the right-hand rule.
///
/// Every ring is closed, then reversed with [`reverse_ring`] if its winding
/// does not match its role. Rings too small to close or classify are left
/// as they are.
pub fn fix_orientation(rings: &mut [Ring]) {
    for (index, ring) in rings.iter_mut().enumerate() {
        let role = RingRole::for_index(index);
        if let Err(err) = close_ring(ring) {
            tracing::trace!(%role, %err, "skipping orientation fix");
            continue;
        }
        let ccw = match is_counter_clockwise(ring) {
            Ok(ccw) => ccw,
            Err(err) => {
                tracing::trace!(%role, %err, "skipping orientation fix");
                continue;
            }
        };
        if ccw != (role == RingRole::Exterior) {
            tracing::trace!(%role, points = ring.len(), "reversing ring winding");
            reverse_ring(ring);
        }
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Ring;
use crate::error::{Result, RingRole};
use crate::math::orientation::{
    close_ring, fix_orientation, validate_orientation, validate_ring_closed,
};
use crate::options::ProcessingOptions;

/// A polygon: an exterior ring followed by zero or more holes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub coordinates: Vec<Ring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Value>,
}

impl Polygon {
    /// Creates a polygon from its rings without any checks.
    #[must_use]
    pub fn new(coordinates: Vec<Ring>) -> Self {
        Self {
            coordinates,
            crs: None,
        }
    }

    /// Creates a polygon, enforcing the ring rules selected by `options`.
    ///
    /// With `validate_orientation`, every ring must be closed and have at
    /// least four points before winding is looked at. Winding is then
    /// handled by [`Polygon::enforce_orientation`].
    ///
    /// # Errors
    ///
    /// Returns a ring error for undersized or open rings, or an orientation
    /// error if the winding is wrong and auto-fixing is disabled.
    pub fn with_options(coordinates: Vec<Ring>, options: &ProcessingOptions) -> Result<Self> {
        if options.validate_orientation {
            for (index, ring) in coordinates.iter().enumerate() {
                validate_ring_closed(ring, RingRole::for_index(index))?;
            }
        }
        let mut polygon = Self::new(coordinates);
        polygon.enforce_orientation(options)?;
        Ok(polygon)
    }

    /// Applies the winding rules selected by `options` in place.
    ///
    /// With `auto_fix_orientation`, wrongly wound rings are reversed and
    /// nothing is rejected; if validation is on as well, rings left open by
    /// the reversal are closed again. With validation alone, the winding is
    /// checked and the rings are left untouched.
    ///
    /// # Errors
    ///
    /// With validation and no auto-fix: a ring error for rings under four
    /// points, or an orientation error for the first wrongly wound ring.
    pub fn enforce_orientation(&mut self, options: &ProcessingOptions) -> Result<()> {
        if options.auto_fix_orientation {
            fix_orientation(&mut self.coordinates);
            if options.validate_orientation {
                for (index, ring) in self.coordinates.iter_mut().enumerate() {
                    if let Err(err) = close_ring(ring) {
                        let role = RingRole::for_index(index);
                        tracing::trace!(%role, %err, "leaving ring open after orientation fix");
                    }
                }
            }
        } else if options.validate_orientation {
            validate_orientation(&self.coordinates)?;
        }
        Ok(())
    }

    /// The exterior ring, if any.
    #[must_use]
    pub fn exterior(&self) -> Option<&Ring> {
        self.coordinates.first()
    }

    /// The interior rings (holes).
    #[must_use]
    pub fn interiors(&self) -> &[Ring] {
        self.coordinates.get(1..).unwrap_or_default()
    }
}

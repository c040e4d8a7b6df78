use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Switches for the RFC 7946 compliance engine.
///
/// The value is passed explicitly to every operation that needs it; there is
/// no process-wide default. [`ProcessingOptions::default`] is the legacy
/// (2008 GeoJSON) behavior with every switch off.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Reject polygons that break the right-hand rule.
    #[serde(rename = "validatePolygonOrientation")]
    pub validate_orientation: bool,

    /// Reverse rings that break the right-hand rule instead of rejecting them.
    #[serde(rename = "autoFixPolygonOrientation")]
    pub auto_fix_orientation: bool,

    /// Split lines and polygons that cross the antimeridian.
    #[serde(rename = "cutAntimeridian")]
    pub cut_antimeridian: bool,

    /// Log a warning when an object carries a legacy `crs` member.
    #[serde(rename = "warnOnCrsUse")]
    pub warn_on_legacy_crs: bool,
}

impl ProcessingOptions {
    /// Every switch off.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            validate_orientation: false,
            auto_fix_orientation: false,
            cut_antimeridian: false,
            warn_on_legacy_crs: false,
        }
    }

    /// Validation, auto-fix and antimeridian cutting on; CRS warnings off.
    #[must_use]
    pub const fn rfc7946() -> Self {
        Self {
            validate_orientation: true,
            auto_fix_orientation: true,
            cut_antimeridian: true,
            warn_on_legacy_crs: false,
        }
    }

    #[must_use]
    pub const fn with_validate_orientation(mut self, enabled: bool) -> Self {
        self.validate_orientation = enabled;
        self
    }

    #[must_use]
    pub const fn with_auto_fix_orientation(mut self, enabled: bool) -> Self {
        self.auto_fix_orientation = enabled;
        self
    }

    #[must_use]
    pub const fn with_cut_antimeridian(mut self, enabled: bool) -> Self {
        self.cut_antimeridian = enabled;
        self
    }

    #[must_use]
    pub const fn with_warn_on_legacy_crs(mut self, enabled: bool) -> Self {
        self.warn_on_legacy_crs = enabled;
        self
    }

    /// Loads options from a JSON object such as
    /// `{"cutAntimeridian": true}`. Missing members are off.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid options object.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::{self, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::Point2;

/// A GeoJSON position: longitude, latitude, optional altitude and any
/// further ordinates.
///
/// Altitude is tri-state: `None` is distinct from `Some(0.0)`. Extra
/// ordinates only exist after an altitude, mirroring the array form
/// `[lon, lat, alt, ...extra]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: Option<f64>,
    pub extra: Vec<f64>,
}

impl Position {
    /// Creates a two-dimensional position.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
            extra: Vec::new(),
        }
    }

    /// Creates a position with an altitude.
    #[must_use]
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            altitude: Some(altitude),
            ..Self::new(longitude, latitude)
        }
    }

    /// Returns a copy with the longitude replaced, keeping every other ordinate.
    #[must_use]
    pub fn at_longitude(&self, longitude: f64) -> Self {
        Self {
            longitude,
            ..self.clone()
        }
    }

    /// Compares longitude and latitude only.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_location(&self, other: &Self) -> bool {
        self.longitude == other.longitude && self.latitude == other.latitude
    }

    /// Longitude/latitude as a planar point (x = longitude, y = latitude).
    #[must_use]
    pub fn xy(&self) -> Point2 {
        Point2::new(self.longitude, self.latitude)
    }
}

impl From<(f64, f64)> for Position {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((longitude, latitude, altitude): (f64, f64, f64)) -> Self {
        Self::with_altitude(longitude, latitude, altitude)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.altitude.is_none() && !self.extra.is_empty() {
            return Err(ser::Error::custom(
                "position has extra ordinates but no altitude",
            ));
        }
        let len = 2 + usize::from(self.altitude.is_some()) + self.extra.len();
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.longitude)?;
        seq.serialize_element(&self.latitude)?;
        if let Some(altitude) = self.altitude {
            seq.serialize_element(&altitude)?;
        }
        for value in &self.extra {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct PositionVisitor;

impl<'de> Visitor<'de> for PositionVisitor {
    type Value = Position;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of at least two numbers")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Position, A::Error> {
        let longitude: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let latitude: f64 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let altitude: Option<f64> = seq.next_element()?;
        let mut extra = Vec::new();
        while let Some(value) = seq.next_element::<f64>()? {
            extra.push(value);
        }
        Ok(Position {
            longitude,
            latitude,
            altitude,
            extra,
        })
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PositionVisitor)
    }
}

//! Compass octants and the bearing classifier.
//!
//! Bearings are computed on the raw latitude/longitude deltas with
//! `atan2(lon_delta, lat_delta)`, so 0° is north and angles grow clockwise.
//! This planar approximation holds for the short hops between consecutive
//! stops; it is not a great-circle bearing and should not be reused for
//! long-haul geometry.

use std::fmt;
use std::str::FromStr;

use crate::models::types::TransitError;

/// Travel direction of a stop, or `Unknown` when none can be derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    #[default]
    Unknown,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 9] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
        Self::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
            Self::Unknown => "unknown",
        }
    }

    /// True for the eight octants.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompassDirection {
    type Err = TransitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| TransitError::InvalidData(format!("Not a compass direction: {s:?}")))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CompassDirection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CompassDirection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Bearing in degrees within `[0, 360)`, clockwise from north.
///
/// Returns `None` for the zero vector and for non-finite results.
pub fn bearing_degrees(lat_delta: f64, lon_delta: f64) -> Option<f64> {
    if lat_delta == 0.0 && lon_delta == 0.0 {
        return None;
    }

    let mut bearing = lon_delta.atan2(lat_delta).to_degrees();
    if bearing < 0.0 {
        bearing += 360.0;
    }
    // A tiny negative angle can round up to exactly 360 after the shift.
    if bearing >= 360.0 {
        bearing -= 360.0;
    }

    bearing.is_finite().then_some(bearing)
}

/// Classify a displacement into one of eight 45° sectors centred on the
/// cardinal and intercardinal directions.
///
/// Sector edges sit at `22.5 + k * 45` degrees and belong to the sector
/// clockwise of them. Only the angle matters, never the magnitude.
pub fn classify(lat_delta: f64, lon_delta: f64) -> CompassDirection {
    let Some(bearing) = bearing_degrees(lat_delta, lon_delta) else {
        return CompassDirection::Unknown;
    };

    if bearing < 22.5 {
        CompassDirection::N
    } else if bearing < 67.5 {
        CompassDirection::NE
    } else if bearing < 112.5 {
        CompassDirection::E
    } else if bearing < 157.5 {
        CompassDirection::SE
    } else if bearing < 202.5 {
        CompassDirection::S
    } else if bearing < 247.5 {
        CompassDirection::SW
    } else if bearing < 292.5 {
        CompassDirection::W
    } else if bearing < 337.5 {
        CompassDirection::NW
    } else {
        CompassDirection::N
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_vector_is_unknown() {
        assert_eq!(classify(0.0, 0.0), CompassDirection::Unknown);
        assert_eq!(classify(-0.0, 0.0), CompassDirection::Unknown);
        assert_eq!(bearing_degrees(0.0, 0.0), None);
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(classify(1.0, 0.0), CompassDirection::N);
        assert_eq!(classify(-1.0, 0.0), CompassDirection::S);
        assert_eq!(classify(0.0, 1.0), CompassDirection::E);
        assert_eq!(classify(0.0, -1.0), CompassDirection::W);
    }

    #[test]
    fn test_intercardinal_directions() {
        assert_eq!(classify(1.0, 1.0), CompassDirection::NE);
        assert_eq!(classify(1.0, -1.0), CompassDirection::NW);
        assert_eq!(classify(-1.0, 1.0), CompassDirection::SE);
        assert_eq!(classify(-1.0, -1.0), CompassDirection::SW);
    }

    #[test]
    fn test_near_sector_edges() {
        // ~21.7°, still north
        assert_eq!(classify(0.93, 0.37), CompassDirection::N);
        // ~68.3°, just past the NE/E edge
        assert_eq!(classify(0.37, 0.93), CompassDirection::E);
        // ~27.6°, just past the N/NE edge
        assert_eq!(classify(0.9, 0.47), CompassDirection::NE);
    }

    #[test]
    fn test_magnitude_does_not_matter() {
        assert_eq!(classify(0.0001, 0.0), CompassDirection::N);
        assert_eq!(classify(-0.0001, -0.0001), CompassDirection::SW);
        assert_eq!(classify(1e-300, 0.0), CompassDirection::N);
        assert_eq!(classify(-1e-300, -1e-300), CompassDirection::SW);
        assert_eq!(classify(5e3, 5e3), CompassDirection::NE);
    }

    #[test]
    fn test_bearing_degrees() {
        assert_relative_eq!(bearing_degrees(1.0, 0.0).unwrap(), 0.0);
        assert_relative_eq!(bearing_degrees(0.0, 1.0).unwrap(), 90.0);
        assert_relative_eq!(bearing_degrees(-1.0, 0.0).unwrap(), 180.0);
        assert_relative_eq!(bearing_degrees(0.0, -1.0).unwrap(), 270.0);
        assert_relative_eq!(bearing_degrees(-1.0, -1.0).unwrap(), 225.0);
        assert_relative_eq!(bearing_degrees(0.93, 0.37).unwrap(), 21.69, epsilon = 0.01);
    }

    #[test]
    fn test_every_sector_from_its_centre() {
        let expected = [
            CompassDirection::N,
            CompassDirection::NE,
            CompassDirection::E,
            CompassDirection::SE,
            CompassDirection::S,
            CompassDirection::SW,
            CompassDirection::W,
            CompassDirection::NW,
        ];
        for (k, direction) in expected.into_iter().enumerate() {
            let angle = (k as f64 * 45.0).to_radians();
            assert_eq!(classify(angle.cos(), angle.sin()), direction, "sector {k}");
        }
    }

    #[test]
    fn test_non_finite_input_is_unknown() {
        assert_eq!(classify(f64::NAN, 1.0), CompassDirection::Unknown);
        assert_eq!(classify(1.0, f64::NAN), CompassDirection::Unknown);
    }

    #[test]
    fn test_tokens() {
        let tokens: Vec<&str> = CompassDirection::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(tokens, ["N", "NE", "E", "SE", "S", "SW", "W", "NW", "unknown"]);

        assert_eq!("SW".parse::<CompassDirection>().unwrap(), CompassDirection::SW);
        assert_eq!(
            "unknown".parse::<CompassDirection>().unwrap(),
            CompassDirection::Unknown
        );
        assert!("north".parse::<CompassDirection>().is_err());
        assert_eq!(CompassDirection::NE.to_string(), "NE");
        assert!(!CompassDirection::Unknown.is_known());
        assert!(CompassDirection::W.is_known());
    }
}

//! Core data types for stop direction lookups.

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// A boarding location with a fixed position.
///
/// `location` follows the geo convention: `x` is longitude, `y` is latitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    pub location: Point,
}

impl Stop {
    pub fn new(id: impl Into<StopIdentifier>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            location: Point::new(lon, lat),
        }
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lon(&self) -> f64 {
        self.location.x()
    }
}

/// One visit of a trip to a stop.
///
/// `stop_sequence` is strictly increasing within a trip but need not be
/// contiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopTimeEntry {
    pub trip_id: TripIdentifier,
    pub stop_id: StopIdentifier,
    pub stop_sequence: u32,
}

impl StopTimeEntry {
    pub fn new(
        trip_id: impl Into<TripIdentifier>,
        stop_id: impl Into<StopIdentifier>,
        stop_sequence: u32,
    ) -> Self {
        Self {
            trip_id: trip_id.into(),
            stop_id: stop_id.into(),
            stop_sequence,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Failed to load feed: {0}")]
    Feed(String),

    #[error("Data store error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, TransitError>;

//! Read-only access to scheduled stop data.
//!
//! The resolver only ever reads through this trait, so it can run against an
//! in-memory fixture, a compiled feed or a database-backed store alike.

use std::future::Future;
use std::pin::Pin;

use crate::identifiers::*;
use crate::models::types::*;

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Provider of stops, trips and stop-time sequences.
///
/// Absence is never an error: a missing stop is `Ok(None)` and an unknown
/// trip or stop yields an empty list. `Err` is reserved for faults in the
/// backing store itself.
pub trait TransitDataStore: Send + Sync {
    fn stop<'a>(&'a self, id: &'a StopIdentifier) -> StoreFuture<'a, Option<Stop>>;

    /// Trips whose stop-time sequence visits `stop_id`, ascending by trip id.
    fn trips_serving_stop<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
    ) -> StoreFuture<'a, Vec<TripIdentifier>>;

    /// Stop-time entries of a trip, ascending by sequence position.
    fn stop_time_sequence<'a>(
        &'a self,
        trip_id: &'a TripIdentifier,
    ) -> StoreFuture<'a, Vec<StopTimeEntry>>;
}

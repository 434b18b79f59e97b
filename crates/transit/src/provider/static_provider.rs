//! In-memory stop data store.
//!
//! Holds every stop and stop-time sequence in memory with the indices the
//! direction resolver needs: stop by id, trip sequence by id, and the sorted
//! list of trips serving each stop.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};

#[derive(Default)]
struct Indices {
    stop_map: HashMap<StopIdentifier, Stop>,
    trip_map: HashMap<TripIdentifier, Vec<StopTimeEntry>>,
    stop_trips: HashMap<StopIdentifier, Vec<TripIdentifier>>,
}

/// In-memory implementation of [`TransitDataStore`].
///
/// This type is cheap to clone since all data is stored in an `Arc`.
#[derive(Clone, Default)]
pub struct StaticTransitProvider {
    inner: Arc<Indices>,
}

impl StaticTransitProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from stops and the stop-time entries of every trip.
    ///
    /// Entries may arrive in any order. A trip that uses the same sequence
    /// position twice is rejected.
    pub fn from_data(stops: Vec<Stop>, stop_times: Vec<StopTimeEntry>) -> Result<Self> {
        let stop_map: HashMap<_, _> = stops.into_iter().map(|s| (s.id.clone(), s)).collect();

        let mut trip_map: HashMap<TripIdentifier, Vec<StopTimeEntry>> = HashMap::new();
        for entry in stop_times {
            trip_map.entry(entry.trip_id.clone()).or_default().push(entry);
        }

        let mut serving: HashMap<StopIdentifier, BTreeSet<TripIdentifier>> = HashMap::new();
        for (trip_id, entries) in trip_map.iter_mut() {
            entries.sort_by_key(|e| e.stop_sequence);

            if let Some(pair) = entries
                .windows(2)
                .find(|pair| pair[0].stop_sequence == pair[1].stop_sequence)
            {
                return Err(TransitError::InvalidData(format!(
                    "Trip {} uses stop_sequence {} more than once",
                    trip_id, pair[0].stop_sequence
                )));
            }

            for entry in entries.iter() {
                serving
                    .entry(entry.stop_id.clone())
                    .or_default()
                    .insert(trip_id.clone());
            }
        }

        let stop_trips = serving
            .into_iter()
            .map(|(stop_id, trips)| (stop_id, trips.into_iter().collect()))
            .collect();

        tracing::debug!(
            stops = stop_map.len(),
            trips = trip_map.len(),
            "built static transit provider"
        );

        Ok(Self {
            inner: Arc::new(Indices {
                stop_map,
                trip_map,
                stop_trips,
            }),
        })
    }

    pub fn get_stop(&self, id: &StopIdentifier) -> Option<&Stop> {
        self.inner.stop_map.get(id)
    }

    /// All stops, sorted by id.
    pub fn all_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self.inner.stop_map.values().collect();
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        stops
    }

    pub fn stop_count(&self) -> usize {
        self.inner.stop_map.len()
    }

    pub fn trip_count(&self) -> usize {
        self.inner.trip_map.len()
    }
}

impl TransitDataStore for StaticTransitProvider {
    fn stop<'a>(&'a self, id: &'a StopIdentifier) -> StoreFuture<'a, Option<Stop>> {
        Box::pin(async move { Ok(self.get_stop(id).cloned()) })
    }

    fn trips_serving_stop<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
    ) -> StoreFuture<'a, Vec<TripIdentifier>> {
        Box::pin(async move {
            Ok(self
                .inner
                .stop_trips
                .get(stop_id)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn stop_time_sequence<'a>(
        &'a self,
        trip_id: &'a TripIdentifier,
    ) -> StoreFuture<'a, Vec<StopTimeEntry>> {
        Box::pin(async move {
            Ok(self
                .inner
                .trip_map
                .get(trip_id)
                .cloned()
                .unwrap_or_default())
        })
    }
}

//! Derive a stop's travel direction from the next scheduled stop.
//!
//! For each trip serving the stop (in trip id order) the resolver looks up
//! the entry that follows the stop in that trip and classifies the hop. The
//! [`DirectionPolicy`] decides how those per-trip candidates combine.
//!
//! Resolution never fails. A missing stop, a stop that ends every trip
//! serving it, a zero-length hop, a next stop the store cannot find and a
//! faulty store all come back as [`CompassDirection::Unknown`]. The last two
//! end the walk without consulting later trips. Store faults are logged here.
//!
//! Dropping the future returned by [`StopDirectionResolver::resolve_direction`]
//! cancels the lookup; no direction is produced for a cancelled call.

pub mod policy;

use std::ops::ControlFlow;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{direction::*, traits::*, types::*};

pub use policy::DirectionPolicy;

#[derive(Clone)]
pub struct StopDirectionResolver {
    store: Arc<dyn TransitDataStore>,
    policy: DirectionPolicy,
}

impl StopDirectionResolver {
    pub fn new(store: Arc<dyn TransitDataStore>) -> Self {
        Self {
            store,
            policy: DirectionPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: DirectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DirectionPolicy {
        self.policy
    }

    pub async fn resolve_direction(&self, stop_id: &StopIdentifier) -> CompassDirection {
        match self.try_resolve(stop_id).await {
            Ok(direction) => direction,
            Err(e) => {
                tracing::warn!(%stop_id, error = %e, "direction lookup failed");
                CompassDirection::Unknown
            }
        }
    }

    /// Resolve several stops one after another, keeping their order.
    pub async fn resolve_directions<I>(&self, stop_ids: I) -> Vec<(StopIdentifier, CompassDirection)>
    where
        I: IntoIterator<Item = StopIdentifier>,
    {
        let mut resolved = Vec::new();
        for stop_id in stop_ids {
            let direction = self.resolve_direction(&stop_id).await;
            resolved.push((stop_id, direction));
        }
        resolved
    }

    async fn try_resolve(&self, stop_id: &StopIdentifier) -> Result<CompassDirection> {
        let Some(stop) = self.store.stop(stop_id).await? else {
            tracing::debug!(%stop_id, "stop not found");
            return Ok(CompassDirection::Unknown);
        };

        let mut tally = self.policy.tally();
        for trip_id in self.store.trips_serving_stop(stop_id).await? {
            let next = match self.next_hop(&trip_id, stop_id).await? {
                NextHop::Terminal => continue,
                NextHop::Missing => return Ok(CompassDirection::Unknown),
                NextHop::Stop(next) => next,
            };

            let candidate = classify(next.lat() - stop.lat(), next.lon() - stop.lon());
            tracing::trace!(%stop_id, %trip_id, next = %next.id, %candidate, "candidate direction");

            if let ControlFlow::Break(direction) = tally.offer(candidate) {
                return Ok(direction);
            }
        }

        Ok(tally.finish())
    }

    /// What follows `stop_id` on `trip_id`.
    ///
    /// A stop visited more than once uses its earliest visit that has a
    /// successor.
    async fn next_hop(&self, trip_id: &TripIdentifier, stop_id: &StopIdentifier) -> Result<NextHop> {
        let sequence = self.store.stop_time_sequence(trip_id).await?;

        let Some(next_id) = sequence
            .windows(2)
            .find(|pair| pair[0].stop_id == *stop_id)
            .map(|pair| pair[1].stop_id.clone())
        else {
            return Ok(NextHop::Terminal);
        };

        match self.store.stop(&next_id).await? {
            Some(next) => Ok(NextHop::Stop(next)),
            None => {
                tracing::debug!(%trip_id, %next_id, "next stop missing from store");
                Ok(NextHop::Missing)
            }
        }
    }
}

enum NextHop {
    /// The stop ends the trip.
    Terminal,
    /// The trip continues to a stop the store does not know.
    Missing,
    Stop(Stop),
}

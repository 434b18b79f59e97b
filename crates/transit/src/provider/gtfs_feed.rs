//! Build a [`StaticTransitProvider`] from a GTFS feed.

use std::path::Path;

use gtfs_structures::Gtfs;

use crate::models::types::*;
use crate::provider::static_provider::StaticTransitProvider;

impl StaticTransitProvider {
    /// Load a GTFS feed from a directory or zip archive.
    pub fn load_gtfs(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Reading GTFS feed: {}", path.display());

        let gtfs = Gtfs::from_path(path).map_err(|e| TransitError::Feed(e.to_string()))?;
        Self::from_gtfs(&gtfs)
    }

    /// Index the stops and stop times of an already parsed feed.
    ///
    /// Stops without coordinates (generic nodes, boarding areas) are left out;
    /// trips visiting them simply find no such stop when looked up.
    pub fn from_gtfs(gtfs: &Gtfs) -> Result<Self> {
        let mut skipped = 0;
        let stops: Vec<Stop> = gtfs
            .stops
            .values()
            .filter_map(|stop| match (stop.latitude, stop.longitude) {
                (Some(lat), Some(lon)) => Some(Stop::new(stop.id.as_str(), lat, lon)),
                _ => {
                    tracing::debug!("Stop {} has no coordinates, skipping", stop.id);
                    skipped += 1;
                    None
                }
            })
            .collect();

        let stop_times: Vec<StopTimeEntry> = gtfs
            .trips
            .values()
            .flat_map(|trip| {
                trip.stop_times.iter().map(move |st| {
                    StopTimeEntry::new(
                        trip.id.as_str(),
                        st.stop.id.as_str(),
                        u32::from(st.stop_sequence),
                    )
                })
            })
            .collect();

        if skipped > 0 {
            tracing::warn!("{} stops without coordinates were skipped", skipped);
        }
        tracing::info!(
            "Loaded {} stops and {} stop times from {} trips",
            stops.len(),
            stop_times.len(),
            gtfs.trips.len()
        );

        Self::from_data(stops, stop_times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::identifiers::*;
    use crate::models::{direction::CompassDirection, traits::TransitDataStore};
    use crate::resolver::StopDirectionResolver;

    fn fixture() -> StaticTransitProvider {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/loop-line");
        StaticTransitProvider::load_gtfs(path).unwrap()
    }

    #[test]
    fn test_load_fixture_feed() {
        let provider = fixture();

        assert_eq!(provider.stop_count(), 4);
        assert_eq!(provider.trip_count(), 2);

        let central = provider.get_stop(&StopIdentifier::new("central")).unwrap();
        assert_eq!(central.lat(), 46.05);
        assert_eq!(central.lon(), 14.5);
    }

    #[tokio::test]
    async fn test_fixture_sequences() {
        let provider = fixture();

        let sequence = provider
            .stop_time_sequence(&TripIdentifier::new("north_1"))
            .await
            .unwrap();
        let stops: Vec<&str> = sequence.iter().map(|e| e.stop_id.as_str()).collect();
        assert_eq!(stops, ["central", "market", "hill"]);

        let trips = provider
            .trips_serving_stop(&StopIdentifier::new("market"))
            .await
            .unwrap();
        assert_eq!(
            trips,
            [TripIdentifier::new("north_1"), TripIdentifier::new("south_1")]
        );
    }

    #[test]
    fn test_missing_feed_is_an_error() {
        let result = StaticTransitProvider::load_gtfs("/definitely/not/a/feed");
        assert!(matches!(result, Err(TransitError::Feed(_))));
    }

    #[tokio::test]
    async fn test_directions_over_fixture_feed() {
        let resolver = StopDirectionResolver::new(Arc::new(fixture()));
        let direction = |id: &str| {
            let resolver = resolver.clone();
            let id = StopIdentifier::new(id);
            async move { resolver.resolve_direction(&id).await }
        };

        // north_1: central -> market is due north
        assert_eq!(direction("central").await, CompassDirection::N);
        // north_1 sorts before south_1: market -> hill goes up and east
        assert_eq!(direction("market").await, CompassDirection::NE);
        // hill only continues on south_1, back towards market
        assert_eq!(direction("hill").await, CompassDirection::SW);
        // depot is served by no trip
        assert_eq!(direction("depot").await, CompassDirection::Unknown);
        assert_eq!(
            direction("nonexistent_stop_xyz").await,
            CompassDirection::Unknown
        );
    }
}

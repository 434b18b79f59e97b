//! Stop data providers.

pub mod static_provider;

#[cfg(feature = "gtfs")]
pub mod gtfs_feed;

pub use static_provider::StaticTransitProvider;

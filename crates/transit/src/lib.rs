//! # transit-direction
//!
//! Label transit stops with the compass direction vehicles leave them in.
//!
//! ## Features
//!
//! - **Bearing classifier**: maps a latitude/longitude delta onto one of the
//!   eight compass octants, or `unknown`
//! - **Direction resolver**: finds the next scheduled stop after a stop and
//!   classifies the hop towards it
//! - **Pluggable storage**: the resolver reads through [`TransitDataStore`],
//!   with an in-memory [`StaticTransitProvider`] included
//! - **GTFS loading**: build the in-memory store from a feed (`gtfs` feature)
//!
//! ## Example
//!
//! ```
//! use transit_direction::prelude::*;
//!
//! assert_eq!(classify(1.0, 0.0), CompassDirection::N);
//! assert_eq!(classify(-1.0, -1.0), CompassDirection::SW);
//! assert_eq!(classify(0.0, 0.0).as_str(), "unknown");
//! ```

pub mod identifiers;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{direction::*, traits::*, types::*};
    pub use crate::provider::static_provider::StaticTransitProvider;
    pub use crate::resolver::{DirectionPolicy, StopDirectionResolver};
}

pub use prelude::*;

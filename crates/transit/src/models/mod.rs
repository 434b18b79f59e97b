//! Stop data models, the bearing classifier, and the store contract.

pub mod direction;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use direction::{bearing_degrees, classify, CompassDirection};
pub use traits::{StoreFuture, TransitDataStore};
pub use types::{Result, Stop, StopTimeEntry, TransitError};

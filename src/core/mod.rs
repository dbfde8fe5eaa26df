pub mod config;
pub mod geo;

// Re-export the essential types
pub use config::{MapConfig, MapOptions, MarkerObject, MarkerSource};
pub use geo::{LatLng, ParsePairError, Point, Size};

//! # Mapify
//!
//! A declarative adapter that turns markup (a container element plus
//! either embedded marker elements or a configuration list) into a fully
//! wired interactive map widget backed by a third-party mapping SDK.
//!
//! The crate does exactly three things: it merges defaults, caller options
//! and `data-*` attributes into one configuration per map; it translates
//! that configuration into the shapes the SDK constructors expect and
//! instantiates the map and its markers; and it routes native map, marker
//! and legend events to user-supplied callback hooks. The DOM and the
//! mapping SDK stay behind narrow traits, with in-memory reference
//! implementations shipped for headless use.

pub mod core;
pub mod dom;
pub mod events;
pub mod map;
pub mod markers;
pub mod prelude;
pub mod sdk;

// Re-export public API
pub use crate::core::{
    config::{MapConfig, MapOptions, MarkerObject, MarkerSource},
    geo::{LatLng, ParsePairError, Point, Size},
};

pub use crate::dom::{Dom, ElementId, ElementRef, MapRegistry, MemoryDom, MemoryElement};

pub use crate::events::{EventHooks, EventRouter, PointerEvent, PointerEventKind};

pub use crate::map::Mapify;

pub use crate::markers::{IconDescriptor, Marker, MarkerId, MarkerSpec};

pub use crate::sdk::{MapSdk, MarkerOptions, RecordingSdk, SdkMapOptions};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapifyError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapifyError {
    /// No explicit center was configured and no marker exists to borrow a
    /// center from
    #[error("No markers available to derive a map center from")]
    NoMarkersAvailable,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapifyError;

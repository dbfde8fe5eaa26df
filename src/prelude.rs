//! Prelude module for common mapify types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapify::prelude::*;`

pub use crate::core::{
    config::{MapConfig, MapOptions, MarkerObject, MarkerSource},
    geo::{LatLng, Point, Size},
};

pub use crate::dom::{
    attrs::DataAttrExt, Dom, ElementId, ElementRef, MapRegistry, MemoryDom, MemoryElement,
};

pub use crate::events::{EventHooks, EventRouter, PointerEvent, PointerEventKind};

pub use crate::map::Mapify;

pub use crate::markers::{
    icon::IconFields, normalize_markers, IconDescriptor, Marker, MarkerId, MarkerSpec,
};

pub use crate::sdk::{MapSdk, MarkerOptions, RecordingSdk, SdkMapOptions};

pub use crate::{Error as MapifyError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

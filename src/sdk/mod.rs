//! Mapping-SDK collaborator seam
//!
//! The adapter never renders a map itself; it drives a mapping SDK through
//! the [`MapSdk`] trait and forwards exactly the option shapes the SDK
//! constructors expect. Absent options are left out of those shapes
//! entirely, never forwarded as nulls.
//!
//! Hosts implement [`MapSdk`] against their real mapping engine. The crate
//! ships [`RecordingSdk`], an in-memory backend that records every
//! constructor call so the adapter is usable and testable headless.

pub mod recording;

pub use recording::RecordingSdk;

use crate::{core::geo::LatLng, dom::ElementId, markers::IconDescriptor};
use serde::{Deserialize, Serialize};

/// Option shape forwarded to the SDK map constructor.
///
/// Fields absent after configuration resolution stay absent here and are
/// skipped during serialization.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkMapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollwheel: Option<bool>,
}

/// Option shape forwarded to the SDK marker constructor.
///
/// The owning map is passed as the [`MapSdk::create_marker`] argument
/// rather than carried as a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    pub position: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// The mapping SDK the adapter drives.
///
/// `Map` and `Marker` are the SDK's live object handles; the adapter stores
/// them but never looks inside. All construction happens synchronously
/// during initialization.
pub trait MapSdk {
    /// Handle to a constructed map
    type Map;
    /// Handle to a constructed marker
    type Marker;

    /// Constructs a map inside `container`
    fn create_map(&mut self, container: ElementId, options: &SdkMapOptions) -> Self::Map;

    /// Constructs a marker owned by `map`
    fn create_marker(&mut self, map: &Self::Map, options: &MarkerOptions) -> Self::Marker;

    /// Applies a center position to `map`
    fn set_center(&mut self, map: &Self::Map, center: LatLng);
}

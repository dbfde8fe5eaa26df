//! Live markers and their pre-instantiation specs

pub mod icon;
pub mod spec;

// Re-export the essential types
pub use icon::{IconDescriptor, IconFields};
pub use spec::{normalize_markers, MarkerSpec};

use crate::{core::geo::LatLng, dom::ElementId, sdk::MapSdk};
use serde::{Deserialize, Serialize};

/// Identity of a live marker: its creation-order index on the owning map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(pub usize);

/// A live marker: the SDK handle plus the resolved fields it was created
/// with.
///
/// Markers are owned by their map instance and never outlive it. The
/// element back-reference, when present, ties the marker to the DOM
/// element it was derived from so legend events can find it.
pub struct Marker<S: MapSdk> {
    id: MarkerId,
    handle: S::Marker,
    position: LatLng,
    label: Option<String>,
    title: Option<String>,
    element: Option<ElementId>,
}

impl<S: MapSdk> Marker<S> {
    pub(crate) fn from_spec(id: MarkerId, handle: S::Marker, spec: MarkerSpec) -> Self {
        Self {
            id,
            handle,
            position: spec.position,
            label: spec.label,
            title: spec.title,
            element: spec.element,
        }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    /// The SDK's handle for this marker
    pub fn handle(&self) -> &S::Marker {
        &self.handle
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The element this marker was derived from, when there was one
    pub fn element(&self) -> Option<ElementId> {
        self.element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::{recording::MarkerHandle, RecordingSdk};

    #[test]
    fn test_marker_carries_spec_fields() {
        let spec = MarkerSpec {
            position: LatLng::new(40.7, -74.0),
            center: false,
            icon: None,
            label: Some("A".to_string()),
            title: Some("Venue".to_string()),
            element: Some(ElementId(7)),
        };
        let marker: Marker<RecordingSdk> = Marker::from_spec(MarkerId(0), MarkerHandle(0), spec);

        assert_eq!(marker.id(), MarkerId(0));
        assert_eq!(marker.position(), LatLng::new(40.7, -74.0));
        assert_eq!(marker.label(), Some("A"));
        assert_eq!(marker.title(), Some("Venue"));
        assert_eq!(marker.element(), Some(ElementId(7)));
        assert_eq!(*marker.handle(), MarkerHandle(0));
    }
}

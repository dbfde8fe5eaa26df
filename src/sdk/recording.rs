use crate::{
    core::geo::LatLng,
    dom::ElementId,
    sdk::{MapSdk, MarkerOptions, SdkMapOptions},
};
use serde::{Deserialize, Serialize};

/// Handle to a map created by [`RecordingSdk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapHandle(pub usize);

/// Handle to a marker created by [`RecordingSdk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerHandle(pub usize);

/// Everything the SDK was told about one map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedMap {
    pub container: ElementId,
    pub options: SdkMapOptions,
    /// The most recently applied center, `None` until one is set
    pub center: Option<LatLng>,
}

/// Everything the SDK was told about one marker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedMarker {
    pub map: MapHandle,
    pub options: MarkerOptions,
}

/// In-memory mapping SDK that records every constructor call and centering
/// instead of talking to a real mapping engine.
///
/// Handles index into the recorded call lists, so a test can follow any
/// handle the adapter stored back to the exact options it was created with.
#[derive(Debug, Default)]
pub struct RecordingSdk {
    maps: Vec<RecordedMap>,
    markers: Vec<RecordedMarker>,
}

impl RecordingSdk {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded maps, in creation order
    pub fn maps(&self) -> &[RecordedMap] {
        &self.maps
    }

    /// All recorded markers, in creation order across maps
    pub fn markers(&self) -> &[RecordedMarker] {
        &self.markers
    }

    pub fn map(&self, handle: MapHandle) -> Option<&RecordedMap> {
        self.maps.get(handle.0)
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&RecordedMarker> {
        self.markers.get(handle.0)
    }

    /// The markers created on one map, in creation order
    pub fn markers_on(&self, map: MapHandle) -> Vec<&RecordedMarker> {
        self.markers
            .iter()
            .filter(|marker| marker.map == map)
            .collect()
    }

    /// The center applied to one map, if any
    pub fn center_of(&self, handle: MapHandle) -> Option<LatLng> {
        self.map(handle).and_then(|map| map.center)
    }
}

impl MapSdk for RecordingSdk {
    type Map = MapHandle;
    type Marker = MarkerHandle;

    fn create_map(&mut self, container: ElementId, options: &SdkMapOptions) -> MapHandle {
        let handle = MapHandle(self.maps.len());
        self.maps.push(RecordedMap {
            container,
            options: *options,
            center: None,
        });
        handle
    }

    fn create_marker(&mut self, map: &MapHandle, options: &MarkerOptions) -> MarkerHandle {
        let handle = MarkerHandle(self.markers.len());
        self.markers.push(RecordedMarker {
            map: *map,
            options: options.clone(),
        });
        handle
    }

    fn set_center(&mut self, map: &MapHandle, center: LatLng) {
        if let Some(recorded) = self.maps.get_mut(map.0) {
            recorded.center = Some(center);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_constructor_calls() {
        let mut sdk = RecordingSdk::new();
        let map = sdk.create_map(
            ElementId(1),
            &SdkMapOptions {
                zoom: Some(10),
                scrollwheel: Some(false),
            },
        );
        let marker = sdk.create_marker(
            &map,
            &MarkerOptions {
                position: LatLng::new(40.7, -74.0),
                icon: None,
                label: None,
                title: None,
            },
        );

        assert_eq!(sdk.maps().len(), 1);
        assert_eq!(sdk.map(map).unwrap().container, ElementId(1));
        assert_eq!(sdk.map(map).unwrap().options.zoom, Some(10));
        assert_eq!(
            sdk.marker(marker).unwrap().options.position,
            LatLng::new(40.7, -74.0)
        );
    }

    #[test]
    fn test_markers_follow_their_map() {
        let mut sdk = RecordingSdk::new();
        let first = sdk.create_map(ElementId(1), &SdkMapOptions::default());
        let second = sdk.create_map(ElementId(2), &SdkMapOptions::default());

        for lat in [1.0, 2.0] {
            sdk.create_marker(
                &first,
                &MarkerOptions {
                    position: LatLng::new(lat, 0.0),
                    icon: None,
                    label: None,
                    title: None,
                },
            );
        }
        sdk.create_marker(
            &second,
            &MarkerOptions {
                position: LatLng::new(3.0, 0.0),
                icon: None,
                label: None,
                title: None,
            },
        );

        assert_eq!(sdk.markers_on(first).len(), 2);
        assert_eq!(sdk.markers_on(second).len(), 1);
    }

    #[test]
    fn test_set_center_overwrites() {
        let mut sdk = RecordingSdk::new();
        let map = sdk.create_map(ElementId(0), &SdkMapOptions::default());
        assert_eq!(sdk.center_of(map), None);

        sdk.set_center(&map, LatLng::new(1.0, 2.0));
        sdk.set_center(&map, LatLng::new(3.0, 4.0));
        assert_eq!(sdk.center_of(map), Some(LatLng::new(3.0, 4.0)));
    }
}

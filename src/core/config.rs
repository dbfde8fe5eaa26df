//! Configuration resolution for map instances
//!
//! Every map is configured from three ordered sources: built-in defaults,
//! caller-supplied options, and `data-*` attributes on the container
//! element. Each source is one [`MapOptions`] layer; [`MapConfig::resolve`]
//! merges them with later layers winning and hands back an immutable view.
//! A value that is absent after the merge is never forwarded to the
//! underlying SDK.

use crate::{
    core::geo::{LatLng, Point, Size},
    dom::{attrs::DataAttrExt, ElementRef},
    sdk::SdkMapOptions,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Where the markers of one map come from: a selector resolving to marker
/// elements, or an ordered list of marker descriptions.
///
/// Untagged, so a `data-markers` attribute carrying a JSON list parses to
/// [`MarkerSource::Objects`] and any other string stays a selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSource {
    Selector(String),
    Objects(Vec<MarkerObject>),
}

impl MarkerSource {
    /// Interprets a raw attribute value: a parsable JSON marker list becomes
    /// an object list, anything else is kept as a selector
    pub fn from_attribute(raw: &str) -> Self {
        serde_json::from_str::<Vec<MarkerObject>>(raw)
            .map(MarkerSource::Objects)
            .unwrap_or_else(|_| MarkerSource::Selector(raw.to_string()))
    }

    pub fn is_selector(&self) -> bool {
        matches!(self, MarkerSource::Selector(_))
    }
}

/// Caller-facing description of one marker in an object list.
///
/// Field names serialize in camelCase, matching the option shapes the
/// underlying SDKs document. The icon geometry fields accept either a
/// `"w,h"` string or a structured value; malformed values read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerObject {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_size: Option<Size>,
    #[serde(
        default,
        deserialize_with = "lenient_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_origin: Option<Point>,
    #[serde(
        default,
        deserialize_with = "lenient_point",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_anchor: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MarkerObject {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            center: None,
            icon: None,
            icon_size: None,
            icon_origin: None,
            icon_anchor: None,
            label: None,
            title: None,
        }
    }

    /// Flags this marker as the map center
    pub fn with_center(mut self, center: bool) -> Self {
        self.center = Some(center);
        self
    }

    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon = Some(url.into());
        self
    }

    pub fn with_icon_size(mut self, size: Size) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn with_icon_origin(mut self, origin: Point) -> Self {
        self.icon_origin = Some(origin);
        self
    }

    pub fn with_icon_anchor(mut self, anchor: Point) -> Self {
        self.icon_anchor = Some(anchor);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

fn lenient_size<'de, D>(deserializer: D) -> Result<Option<Size>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match &value {
        serde_json::Value::String(text) => text.parse().ok(),
        _ => serde_json::from_value(value).ok(),
    })
}

fn lenient_point<'de, D>(deserializer: D) -> Result<Option<Point>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match &value {
        serde_json::Value::String(text) => text.parse().ok(),
        _ => serde_json::from_value(value).ok(),
    })
}

/// One configuration layer: every recognized option as an optional field.
///
/// Three layers feed the merge, lowest to highest precedence: built-in
/// defaults ([`MapOptions::builtin`]), caller options, and container data
/// attributes ([`MapOptions::from_attributes`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<MarkerSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_lng: Option<f64>,
    /// Zoom level, 1 (world) through 20 (buildings)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
    /// Zoom with the mouse scrollwheel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scrollwheel: Option<bool>,
    /// Default icon url; marker-level icons override it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_origin: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<Point>,
}

impl MapOptions {
    /// Creates an empty layer; every field is absent
    pub fn new() -> Self {
        Self {
            markers: None,
            lat: None,
            lng: None,
            center_lat: None,
            center_lng: None,
            zoom: None,
            scrollwheel: None,
            icon: None,
            icon_size: None,
            icon_origin: None,
            icon_anchor: None,
        }
    }

    /// The built-in defaults layer: an empty marker list, city-level zoom,
    /// scrollwheel zooming off
    pub fn builtin() -> Self {
        Self {
            markers: Some(MarkerSource::Objects(Vec::new())),
            zoom: Some(10),
            scrollwheel: Some(false),
            ..Self::new()
        }
    }

    /// The container-attribute layer.
    ///
    /// `centerLat`/`centerLng` fall back to the plain `data-lat`/`data-lng`
    /// attributes when the center-specific ones are absent; empty and
    /// unparsable attributes read as absent and so never overwrite a
    /// caller-set value.
    pub fn from_attributes<E: ElementRef>(container: &E) -> Self {
        Self {
            markers: container.data_markers(),
            lat: container.data_parse("lat"),
            lng: container.data_parse("lng"),
            center_lat: container
                .data_parse("center-lat")
                .or_else(|| container.data_parse("lat")),
            center_lng: container
                .data_parse("center-lng")
                .or_else(|| container.data_parse("lng")),
            zoom: container.data_parse("zoom"),
            scrollwheel: container.data_boolean("scrollwheel"),
            icon: container.data_text("icon"),
            icon_size: container.data_parse("icon-size"),
            icon_origin: container.data_parse("icon-origin"),
            icon_anchor: container.data_parse("icon-anchor"),
        }
    }

    /// Parses a caller options layer from JSON (camelCase keys)
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merges two layers; present values in `overrides` win
    pub fn merge(self, overrides: MapOptions) -> MapOptions {
        MapOptions {
            markers: overrides.markers.or(self.markers),
            lat: overrides.lat.or(self.lat),
            lng: overrides.lng.or(self.lng),
            center_lat: overrides.center_lat.or(self.center_lat),
            center_lng: overrides.center_lng.or(self.center_lng),
            zoom: overrides.zoom.or(self.zoom),
            scrollwheel: overrides.scrollwheel.or(self.scrollwheel),
            icon: overrides.icon.or(self.icon),
            icon_size: overrides.icon_size.or(self.icon_size),
            icon_origin: overrides.icon_origin.or(self.icon_origin),
            icon_anchor: overrides.icon_anchor.or(self.icon_anchor),
        }
    }

    /// Sets the single-marker coordinate shortcut
    pub fn with_coordinates(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Sets an explicit center, independent of marker contents
    pub fn with_center(mut self, lat: f64, lng: f64) -> Self {
        self.center_lat = Some(lat);
        self.center_lng = Some(lng);
        self
    }

    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = Some(zoom);
        self
    }

    pub fn with_scrollwheel(mut self, scrollwheel: bool) -> Self {
        self.scrollwheel = Some(scrollwheel);
        self
    }

    pub fn with_markers(mut self, markers: MarkerSource) -> Self {
        self.markers = Some(markers);
        self
    }

    /// Sets the marker source to a selector of marker elements
    pub fn with_marker_selector(self, selector: impl Into<String>) -> Self {
        self.with_markers(MarkerSource::Selector(selector.into()))
    }

    /// Sets the marker source to an ordered object list
    pub fn with_marker_objects(self, markers: Vec<MarkerObject>) -> Self {
        self.with_markers(MarkerSource::Objects(markers))
    }

    pub fn with_icon(mut self, url: impl Into<String>) -> Self {
        self.icon = Some(url.into());
        self
    }

    pub fn with_icon_size(mut self, size: Size) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn with_icon_origin(mut self, origin: Point) -> Self {
        self.icon_origin = Some(origin);
        self
    }

    pub fn with_icon_anchor(mut self, anchor: Point) -> Self {
        self.icon_anchor = Some(anchor);
        self
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The fully merged, immutable configuration of one map instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    options: MapOptions,
}

impl MapConfig {
    /// Resolves the three configuration layers for one container.
    ///
    /// Merge order, later overrides earlier: built-in defaults, caller
    /// options, container data attributes.
    pub fn resolve<E: ElementRef>(container: &E, caller: MapOptions) -> Self {
        let options = MapOptions::builtin()
            .merge(caller)
            .merge(MapOptions::from_attributes(container));
        Self { options }
    }

    /// The merged option set
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// The single-marker shortcut: present when both `lat` and `lng` are set
    pub fn single_marker_coords(&self) -> Option<LatLng> {
        match (self.options.lat, self.options.lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }

    /// The explicitly configured center, when both components are set
    pub fn explicit_center(&self) -> Option<LatLng> {
        match (self.options.center_lat, self.options.center_lng) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        }
    }

    /// The marker selector, when the marker source is a selector string
    pub fn marker_selector(&self) -> Option<&str> {
        match &self.options.markers {
            Some(MarkerSource::Selector(selector)) => Some(selector),
            _ => None,
        }
    }

    /// The marker object list; empty unless the source is an object list
    pub fn marker_objects(&self) -> &[MarkerObject] {
        match &self.options.markers {
            Some(MarkerSource::Objects(objects)) => objects,
            _ => &[],
        }
    }

    /// Whether the marker source is a selector of marker elements
    pub fn uses_marker_elements(&self) -> bool {
        self.marker_selector().is_some()
    }

    /// The option shape forwarded to the SDK map constructor
    pub fn sdk_map_options(&self) -> SdkMapOptions {
        SdkMapOptions {
            zoom: self.options.zoom,
            scrollwheel: self.options.scrollwheel,
        }
    }

    /// The plugin-wide default icon url
    pub fn icon(&self) -> Option<&str> {
        self.options.icon.as_deref()
    }

    pub fn icon_size(&self) -> Option<Size> {
        self.options.icon_size
    }

    pub fn icon_origin(&self) -> Option<Point> {
        self.options.icon_origin
    }

    pub fn icon_anchor(&self) -> Option<Point> {
        self.options.icon_anchor
    }
}

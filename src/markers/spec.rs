//! Marker normalization
//!
//! Exactly one of three source strategies produces the marker list of a
//! map, in precedence order: the single-coordinate shortcut (the container
//! itself is the sole marker), a selector resolving to marker elements, or
//! an object list. Whatever the source, the output is an ordered sequence
//! of [`MarkerSpec`] values, consumed once each to build live markers in
//! the same order.

use crate::{
    core::{
        config::{MapConfig, MarkerObject},
        geo::LatLng,
    },
    dom::{attrs::DataAttrExt, Dom, ElementId, ElementRef},
    markers::icon::{self, IconDescriptor, IconFields},
    sdk::MarkerOptions,
};
use serde::{Deserialize, Serialize};

/// Normalized, pre-instantiation description of one marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub position: LatLng,
    /// Whether this marker claims the map center
    pub center: bool,
    pub icon: Option<IconDescriptor>,
    pub label: Option<String>,
    pub title: Option<String>,
    /// The element this marker was derived from, when there was one
    pub element: Option<ElementId>,
}

impl MarkerSpec {
    /// Normalizes one object-list entry
    pub fn from_object(object: &MarkerObject, config: &MapConfig) -> Self {
        Self {
            position: LatLng::new(object.lat, object.lng),
            center: object.center.unwrap_or(false),
            icon: icon::resolve(
                IconFields::from_object(object),
                IconFields::default(),
                IconFields::from_config(config),
            ),
            label: object.label.clone(),
            title: object.title.clone(),
            element: None,
        }
    }

    /// Normalizes one marker element from its `data-*` attributes.
    ///
    /// An element without a parsable `data-lat`/`data-lng` pair yields no
    /// spec; the caller skips it.
    pub fn from_element<E: ElementRef>(element: &E, config: &MapConfig) -> Option<Self> {
        let position = match (element.data_parse("lat"), element.data_parse("lng")) {
            (Some(lat), Some(lng)) => LatLng::new(lat, lng),
            _ => {
                log::warn!(
                    "skipping marker element {:?}: no parsable data-lat/data-lng",
                    element.id()
                );
                return None;
            }
        };

        Some(Self {
            position,
            center: element.data_flag("center"),
            icon: icon::resolve(
                IconFields::default(),
                IconFields::from_element(element),
                IconFields::from_config(config),
            ),
            label: element.data_text("label"),
            title: element.data_text("title"),
            element: Some(element.id()),
        })
    }

    /// Normalizes the container itself as the sole marker, positioned at
    /// the merged configuration's coordinate pair
    pub fn from_container<E: ElementRef>(
        container: &E,
        position: LatLng,
        config: &MapConfig,
    ) -> Self {
        Self {
            position,
            center: container.data_flag("center"),
            icon: icon::resolve(
                IconFields::default(),
                IconFields::from_element(container),
                IconFields::from_config(config),
            ),
            label: container.data_text("label"),
            title: container.data_text("title"),
            element: Some(container.id()),
        }
    }

    /// The marker constructor shape forwarded to the SDK
    pub fn sdk_options(&self) -> MarkerOptions {
        MarkerOptions {
            position: self.position,
            icon: self.icon.clone(),
            label: self.label.clone(),
            title: self.title.clone(),
        }
    }
}

/// Normalizes the configured marker source into an ordered spec list.
///
/// Exactly one strategy executes. Element-list specs come back in document
/// order, object-list specs in input order.
pub fn normalize_markers<D: Dom>(
    dom: &D,
    container: &D::Element,
    config: &MapConfig,
) -> Vec<MarkerSpec> {
    if let Some(position) = config.single_marker_coords() {
        return vec![MarkerSpec::from_container(container, position, config)];
    }

    if let Some(selector) = config.marker_selector() {
        return dom
            .select(selector)
            .iter()
            .filter_map(|element| MarkerSpec::from_element(element, config))
            .collect();
    }

    config
        .marker_objects()
        .iter()
        .map(|object| MarkerSpec::from_object(object, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::config::MapOptions,
        dom::{MemoryDom, MemoryElement},
    };

    fn resolve(container: &MemoryElement, options: MapOptions) -> MapConfig {
        MapConfig::resolve(container, options)
    }

    #[test]
    fn test_single_coordinate_mode_wins() {
        let mut dom = MemoryDom::new();
        dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "1.0")
                .with_attr("data-lng", "2.0"),
        );
        let container_id = dom.insert(
            MemoryElement::new("div")
                .with_attr("data-lat", "40.7")
                .with_attr("data-lng", "-74.0"),
        );
        let container = dom.get(container_id).unwrap().clone();

        // The selector is configured too, but the coordinate pair takes
        // precedence.
        let config = resolve(&container, MapOptions::new().with_marker_selector(".pin"));
        let specs = normalize_markers(&dom, &container, &config);

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].position, LatLng::new(40.7, -74.0));
        assert_eq!(specs[0].element, Some(container_id));
    }

    #[test]
    fn test_element_mode_preserves_document_order() {
        let mut dom = MemoryDom::new();
        let first = dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "1.0")
                .with_attr("data-lng", "1.5")
                .with_attr("data-label", "A"),
        );
        let second = dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "2.0")
                .with_attr("data-lng", "2.5")
                .with_attr("data-center", "true"),
        );
        let container_id = dom.insert(MemoryElement::new("div"));
        let container = dom.get(container_id).unwrap().clone();

        let config = resolve(&container, MapOptions::new().with_marker_selector(".pin"));
        let specs = normalize_markers(&dom, &container, &config);

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].element, Some(first));
        assert_eq!(specs[0].label, Some("A".to_string()));
        assert!(!specs[0].center);
        assert_eq!(specs[1].element, Some(second));
        assert!(specs[1].center);
    }

    #[test]
    fn test_element_without_coordinates_is_skipped() {
        let mut dom = MemoryDom::new();
        dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "1.0")
                .with_attr("data-lng", "1.5"),
        );
        dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "north"),
        );
        let container_id = dom.insert(MemoryElement::new("div"));
        let container = dom.get(container_id).unwrap().clone();

        let config = resolve(&container, MapOptions::new().with_marker_selector(".pin"));
        let specs = normalize_markers(&dom, &container, &config);

        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].position, LatLng::new(1.0, 1.5));
    }

    #[test]
    fn test_object_mode_preserves_input_order() {
        let dom = MemoryDom::new();
        let container = MemoryElement::new("div");
        let config = resolve(
            &container,
            MapOptions::new().with_marker_objects(vec![
                MarkerObject::new(1.0, 1.5).with_title("first"),
                MarkerObject::new(2.0, 2.5).with_center(true),
            ]),
        );
        let specs = normalize_markers(&dom, &container, &config);

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].title, Some("first".to_string()));
        assert_eq!(specs[0].element, None);
        assert!(specs[1].center);
    }

    #[test]
    fn test_modes_produce_equivalent_specs() {
        // The same marker expressed through all three sources comes out
        // field-for-field equal, except for the element back-reference.
        let mut dom = MemoryDom::new();
        let element_id = dom.insert(
            MemoryElement::new("li")
                .with_class("pin")
                .with_attr("data-lat", "48.8566")
                .with_attr("data-lng", "2.3522")
                .with_attr("data-icon", "pin.png")
                .with_attr("data-label", "P"),
        );
        let single_id = dom.insert(
            MemoryElement::new("div")
                .with_attr("data-lat", "48.8566")
                .with_attr("data-lng", "2.3522")
                .with_attr("data-icon", "pin.png")
                .with_attr("data-label", "P"),
        );
        let plain_id = dom.insert(MemoryElement::new("div"));

        let single_container = dom.get(single_id).unwrap().clone();
        let plain_container = dom.get(plain_id).unwrap().clone();

        let from_single = normalize_markers(
            &dom,
            &single_container,
            &resolve(&single_container, MapOptions::new()),
        );
        let from_elements = normalize_markers(
            &dom,
            &plain_container,
            &resolve(&plain_container, MapOptions::new().with_marker_selector(".pin")),
        );
        let from_objects = normalize_markers(
            &dom,
            &plain_container,
            &resolve(
                &plain_container,
                MapOptions::new().with_marker_objects(vec![MarkerObject::new(48.8566, 2.3522)
                    .with_icon("pin.png")
                    .with_label("P")]),
            ),
        );

        for specs in [&from_single, &from_elements, &from_objects] {
            assert_eq!(specs.len(), 1);
            assert_eq!(specs[0].position, LatLng::new(48.8566, 2.3522));
            assert!(!specs[0].center);
            assert_eq!(specs[0].icon, Some(IconDescriptor::new("pin.png")));
            assert_eq!(specs[0].label, Some("P".to_string()));
            assert_eq!(specs[0].title, None);
        }
        assert_eq!(from_single[0].element, Some(single_id));
        assert_eq!(from_elements[0].element, Some(element_id));
        assert_eq!(from_objects[0].element, None);
    }

    #[test]
    fn test_config_default_icon_fills_missing_fields() {
        let dom = MemoryDom::new();
        let container = MemoryElement::new("div")
            .with_attr("data-icon", "default.png")
            .with_attr("data-icon-size", "24,24");
        let config = resolve(
            &container,
            MapOptions::new().with_marker_objects(vec![
                MarkerObject::new(1.0, 1.0),
                MarkerObject::new(2.0, 2.0).with_icon("special.png"),
            ]),
        );
        let specs = normalize_markers(&dom, &container, &config);

        let default_icon = specs[0].icon.as_ref().unwrap();
        assert_eq!(default_icon.url, "default.png");

        // The marker-level url wins; the size still falls through to the
        // configured default.
        let special_icon = specs[1].icon.as_ref().unwrap();
        assert_eq!(special_icon.url, "special.png");
        assert_eq!(
            special_icon.scaled_size,
            Some(crate::core::geo::Size::new(24.0, 24.0))
        );
    }

    #[test]
    fn test_no_icon_url_anywhere_forwards_no_icon() {
        let dom = MemoryDom::new();
        let container = MemoryElement::new("div").with_attr("data-icon-size", "24,24");
        let config = resolve(
            &container,
            MapOptions::new().with_marker_objects(vec![MarkerObject::new(1.0, 1.0)]),
        );
        let specs = normalize_markers(&dom, &container, &config);

        assert_eq!(specs[0].icon, None);
        assert_eq!(specs[0].sdk_options().icon, None);
    }
}

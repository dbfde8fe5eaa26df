//! Instance registry
//!
//! The composing application owns one [`MapRegistry`] and initializes
//! containers through it. The registry maps container identity to the map
//! instance built on it, which makes re-initialization an explicit,
//! checkable no-op instead of an accident waiting on stored element data.

use crate::{
    core::config::MapOptions,
    dom::{Dom, ElementId, ElementRef},
    events::EventHooks,
    map::Mapify,
    prelude::HashMap,
    sdk::MapSdk,
    Result,
};
use log::debug;
use std::collections::hash_map::Entry;

/// Registry of map instances, keyed by container identity
pub struct MapRegistry<S: MapSdk> {
    instances: HashMap<ElementId, Mapify<S>>,
}

impl<S: MapSdk> MapRegistry<S> {
    pub fn new() -> Self {
        Self {
            instances: HashMap::default(),
        }
    }

    /// Initializes a map on `container`, or returns the existing instance.
    ///
    /// Idempotent per container: a second call is a no-op that leaves the
    /// stored instance untouched. A failed initialization registers
    /// nothing, so a later call with fixed inputs can succeed.
    pub fn init<D: Dom>(
        &mut self,
        dom: &D,
        container: &D::Element,
        options: MapOptions,
        hooks: EventHooks<S>,
        sdk: &mut S,
    ) -> Result<&Mapify<S>> {
        match self.instances.entry(container.id()) {
            Entry::Occupied(entry) => {
                debug!(
                    "container {:?} is already initialized, keeping the existing map",
                    container.id()
                );
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let instance = Mapify::init(dom, container, options, hooks, sdk)?;
                Ok(entry.insert(instance))
            }
        }
    }

    /// Initializes every container matched by `selector`, skipping the
    /// already-initialized ones, and returns how many instances were newly
    /// created.
    ///
    /// Each container gets its own clone of the options and hooks, so one
    /// hook set observes every matched map.
    pub fn init_all<D: Dom>(
        &mut self,
        dom: &D,
        selector: &str,
        options: &MapOptions,
        hooks: &EventHooks<S>,
        sdk: &mut S,
    ) -> Result<usize> {
        let mut created = 0;
        for container in dom.select(selector) {
            if self.is_initialized(container.id()) {
                continue;
            }
            let instance = Mapify::init(dom, &container, options.clone(), hooks.clone(), sdk)?;
            self.instances.insert(container.id(), instance);
            created += 1;
        }
        Ok(created)
    }

    /// Whether a map has been initialized on `container`
    pub fn is_initialized(&self, container: ElementId) -> bool {
        self.instances.contains_key(&container)
    }

    /// The instance initialized on `container`, if any
    pub fn get(&self, container: ElementId) -> Option<&Mapify<S>> {
        self.instances.get(&container)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl<S: MapSdk> Default for MapRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::geo::LatLng,
        dom::{MemoryDom, MemoryElement},
        sdk::RecordingSdk,
        MapifyError,
    };

    fn container(lat: &str, lng: &str) -> MemoryElement {
        MemoryElement::new("div")
            .with_class("map")
            .with_attr("data-lat", lat)
            .with_attr("data-lng", lng)
    }

    #[test]
    fn test_second_init_is_a_no_op() {
        let mut dom = MemoryDom::new();
        let id = dom.insert(container("1.0", "2.0"));
        let element = dom.get(id).unwrap().clone();

        let mut registry = MapRegistry::new();
        let mut sdk = RecordingSdk::new();
        registry
            .init(&dom, &element, MapOptions::new(), EventHooks::new(), &mut sdk)
            .unwrap();
        registry
            .init(&dom, &element, MapOptions::new(), EventHooks::new(), &mut sdk)
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.is_initialized(id));
        // The second call constructed nothing on the SDK side.
        assert_eq!(sdk.maps().len(), 1);
    }

    #[test]
    fn test_init_all_skips_initialized_containers() {
        let mut dom = MemoryDom::new();
        let first = dom.insert(container("1.0", "2.0"));
        dom.insert(container("3.0", "4.0"));
        dom.insert(MemoryElement::new("div")); // no .map class, not matched
        let element = dom.get(first).unwrap().clone();

        let mut registry = MapRegistry::new();
        let mut sdk = RecordingSdk::new();
        registry
            .init(&dom, &element, MapOptions::new(), EventHooks::new(), &mut sdk)
            .unwrap();

        let created = registry
            .init_all(&dom, ".map", &MapOptions::new(), &EventHooks::new(), &mut sdk)
            .unwrap();
        assert_eq!(created, 1);
        assert_eq!(registry.len(), 2);

        let repeat = registry
            .init_all(&dom, ".map", &MapOptions::new(), &EventHooks::new(), &mut sdk)
            .unwrap();
        assert_eq!(repeat, 0);
        assert_eq!(sdk.maps().len(), 2);
    }

    #[test]
    fn test_failed_init_registers_nothing() {
        let mut dom = MemoryDom::new();
        let id = dom.insert(MemoryElement::new("div"));
        let element = dom.get(id).unwrap().clone();

        let mut registry = MapRegistry::new();
        let mut sdk = RecordingSdk::new();
        let result = registry.init(&dom, &element, MapOptions::new(), EventHooks::new(), &mut sdk);

        assert!(matches!(result, Err(MapifyError::NoMarkersAvailable)));
        assert!(registry.is_empty());
        assert!(!registry.is_initialized(id));

        // Fixed inputs on a later call succeed.
        registry
            .init(
                &dom,
                &element,
                MapOptions::new().with_coordinates(5.0, 6.0),
                EventHooks::new(),
                &mut sdk,
            )
            .unwrap();
        assert_eq!(registry.get(id).unwrap().center(), LatLng::new(5.0, 6.0));
    }
}

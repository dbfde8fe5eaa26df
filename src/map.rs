//! The map instance
//!
//! [`Mapify::init`] is the whole construction flow: resolve the
//! configuration for one container, normalize the marker source, build the
//! SDK map and then each marker in order, and establish the center. The
//! returned instance owns the resolved configuration, the live handles and
//! the event router; the host feeds native events into it through the
//! `handle_*` methods.

use crate::{
    core::{
        config::{MapConfig, MapOptions},
        geo::LatLng,
    },
    dom::{Dom, ElementId, ElementRef},
    events::{EventHooks, EventRouter, PointerEvent, PointerEventKind},
    markers::{normalize_markers, Marker, MarkerId},
    sdk::MapSdk,
    MapifyError, Result,
};
use log::debug;

/// One fully wired map instance, exclusively owning its configuration,
/// its live markers and its event routing.
pub struct Mapify<S: MapSdk> {
    container: ElementId,
    config: MapConfig,
    map: S::Map,
    markers: Vec<Marker<S>>,
    center: LatLng,
    router: EventRouter<S>,
}

impl<S: MapSdk> Mapify<S> {
    /// Builds a fully wired map for one container.
    ///
    /// Runs synchronously: configuration resolution, map construction,
    /// marker construction in source order, centering. Fails with
    /// [`MapifyError::NoMarkersAvailable`] when no center can be
    /// established, in which case nothing needs tearing down; the SDK
    /// objects created so far are simply dropped with the error.
    pub fn init<D: Dom>(
        dom: &D,
        container: &D::Element,
        options: MapOptions,
        hooks: EventHooks<S>,
        sdk: &mut S,
    ) -> Result<Self> {
        let config = MapConfig::resolve(container, options);
        let specs = normalize_markers(dom, container, &config);

        let map = sdk.create_map(container.id(), &config.sdk_map_options());
        let legend_selector = config.marker_selector().map(str::to_string);
        let mut router = EventRouter::new(hooks, legend_selector);

        let mut markers = Vec::with_capacity(specs.len());
        let mut flagged_center = None;
        for (index, spec) in specs.into_iter().enumerate() {
            let handle = sdk.create_marker(&map, &spec.sdk_options());
            if spec.center {
                flagged_center = Some(spec.position);
            }
            let marker = Marker::from_spec(MarkerId(index), handle, spec);
            router.register_marker(&marker);
            markers.push(marker);
        }

        let center = Self::resolve_center(&config, flagged_center, &markers)?;
        sdk.set_center(&map, center);

        debug!(
            "initialized map on container {:?}: {} markers, center ({}, {})",
            container.id(),
            markers.len(),
            center.lat,
            center.lng
        );

        Ok(Self {
            container: container.id(),
            config,
            map,
            markers,
            center,
            router,
        })
    }

    /// Centering precedence: the explicitly configured center, else the
    /// last `center`-flagged marker, else the first created marker.
    fn resolve_center(
        config: &MapConfig,
        flagged: Option<LatLng>,
        markers: &[Marker<S>],
    ) -> Result<LatLng> {
        config
            .explicit_center()
            .or(flagged)
            .or_else(|| markers.first().map(|marker| marker.position()))
            .ok_or(MapifyError::NoMarkersAvailable)
    }

    /// The container this map was built on
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// The resolved configuration
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// The SDK's handle for this map
    pub fn map(&self) -> &S::Map {
        &self.map
    }

    /// The live markers, in creation order
    pub fn markers(&self) -> &[Marker<S>] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker<S>> {
        self.markers.get(id.0)
    }

    /// The center applied to the map
    pub fn center(&self) -> LatLng {
        self.center
    }

    /// The event router, exposing the legend selector and element index
    pub fn router(&self) -> &EventRouter<S> {
        &self.router
    }

    /// Routes a native map click to the `on_map_click` hook
    pub fn handle_map_click(&self, event: &PointerEvent) {
        self.router.dispatch_map_click(&self.map, event);
    }

    /// Routes a native marker event to the matching marker hook
    pub fn handle_marker_event(
        &self,
        marker: MarkerId,
        kind: PointerEventKind,
        event: &PointerEvent,
    ) {
        match self.marker(marker) {
            Some(subject) => self.router.dispatch_marker(subject, &self.map, kind, event),
            None => debug!("ignoring {:?} for unknown marker {:?}", kind, marker),
        }
    }

    /// Routes a delegated legend-element event to the matching legend hook.
    ///
    /// A no-op outside element-list mode and for elements the router never
    /// saw, such as nodes matched by the selector only after
    /// initialization.
    pub fn handle_legend_event(
        &self,
        element: ElementId,
        kind: PointerEventKind,
        event: &PointerEvent,
    ) {
        let marker = match self.router.marker_for_element(element) {
            Some(id) => id,
            None => {
                debug!("ignoring legend {:?} for unknown element {:?}", kind, element);
                return;
            }
        };
        if let Some(subject) = self.marker(marker) {
            self.router.dispatch_legend(subject, &self.map, kind, event);
        }
    }
}

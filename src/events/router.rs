//! Event dispatch
//!
//! The router holds the hook table of one map instance plus everything
//! legend dispatch needs: the original marker selector and the index from
//! spawning element to marker. Legend lookups only ever succeed in
//! element-list mode; in the other modes the index stays empty.

use crate::{
    dom::ElementId,
    events::{EventHooks, PointerEvent, PointerEventKind},
    markers::{Marker, MarkerId},
    prelude::HashMap,
    sdk::MapSdk,
};

/// Routes externally delivered native events to the configured hooks
pub struct EventRouter<S: MapSdk> {
    hooks: EventHooks<S>,
    legend_selector: Option<String>,
    marker_index: HashMap<ElementId, MarkerId>,
}

impl<S: MapSdk> EventRouter<S> {
    pub(crate) fn new(hooks: EventHooks<S>, legend_selector: Option<String>) -> Self {
        Self {
            hooks,
            legend_selector,
            marker_index: HashMap::default(),
        }
    }

    /// Indexes a created marker for legend lookup.
    ///
    /// Only markers with an element back-reference are indexed, and only
    /// in element-list mode.
    pub(crate) fn register_marker(&mut self, marker: &Marker<S>) {
        if self.legend_selector.is_none() {
            return;
        }
        if let Some(element) = marker.element() {
            self.marker_index.insert(element, marker.id());
        }
    }

    /// The selector legend events are delegated to; present only in
    /// element-list mode
    pub fn legend_selector(&self) -> Option<&str> {
        self.legend_selector.as_deref()
    }

    /// Looks up the marker spawned by `element`
    pub fn marker_for_element(&self, element: ElementId) -> Option<MarkerId> {
        self.marker_index.get(&element).copied()
    }

    pub fn dispatch_map_click(&self, map: &S::Map, event: &PointerEvent) {
        if let Some(hook) = self.hooks.map_click() {
            hook(map, event);
        }
    }

    pub fn dispatch_marker(
        &self,
        marker: &Marker<S>,
        map: &S::Map,
        kind: PointerEventKind,
        event: &PointerEvent,
    ) {
        if let Some(hook) = self.hooks.marker(kind) {
            hook(marker, map, event);
        }
    }

    pub fn dispatch_legend(
        &self,
        marker: &Marker<S>,
        map: &S::Map,
        kind: PointerEventKind,
        event: &PointerEvent,
    ) {
        if let Some(hook) = self.hooks.legend(kind) {
            hook(marker, map, event);
        }
    }
}

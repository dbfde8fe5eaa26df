//! User callback hooks
//!
//! Seven optional hooks cover the callback surface: one for map clicks,
//! three for marker events, three for their legend-element mirrors. Every
//! hook is optional; dispatch silently skips absent ones, so there is no
//! default behavior to suppress and nothing to error on.

use crate::{
    events::{PointerEvent, PointerEventKind},
    markers::Marker,
    sdk::MapSdk,
};
use std::{fmt, sync::Arc};

/// Hook called on map-level events as `(map, event)`
pub type MapHook<S> = Arc<dyn Fn(&<S as MapSdk>::Map, &PointerEvent)>;

/// Hook called on marker and legend events as `(marker, map, event)`
pub type MarkerHook<S> = Arc<dyn Fn(&Marker<S>, &<S as MapSdk>::Map, &PointerEvent)>;

/// The user-overridable callback hooks of one map instance.
///
/// Hooks are shared handles, so one value can be cloned across every
/// container a selector matches and still observe all of them.
pub struct EventHooks<S: MapSdk> {
    on_map_click: Option<MapHook<S>>,
    on_marker_click: Option<MarkerHook<S>>,
    on_marker_mouse_enter: Option<MarkerHook<S>>,
    on_marker_mouse_leave: Option<MarkerHook<S>>,
    on_marker_legend_click: Option<MarkerHook<S>>,
    on_marker_legend_mouse_enter: Option<MarkerHook<S>>,
    on_marker_legend_mouse_leave: Option<MarkerHook<S>>,
}

impl<S: MapSdk> EventHooks<S> {
    /// Creates an empty hook set; every dispatch is a no-op until hooks
    /// are added
    pub fn new() -> Self {
        Self {
            on_map_click: None,
            on_marker_click: None,
            on_marker_mouse_enter: None,
            on_marker_mouse_leave: None,
            on_marker_legend_click: None,
            on_marker_legend_mouse_enter: None,
            on_marker_legend_mouse_leave: None,
        }
    }

    pub fn on_map_click(mut self, hook: impl Fn(&S::Map, &PointerEvent) + 'static) -> Self {
        self.on_map_click = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_click(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_click = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_mouse_enter(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_mouse_enter = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_mouse_leave(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_mouse_leave = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_legend_click(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_legend_click = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_legend_mouse_enter(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_legend_mouse_enter = Some(Arc::new(hook));
        self
    }

    pub fn on_marker_legend_mouse_leave(
        mut self,
        hook: impl Fn(&Marker<S>, &S::Map, &PointerEvent) + 'static,
    ) -> Self {
        self.on_marker_legend_mouse_leave = Some(Arc::new(hook));
        self
    }

    pub(crate) fn map_click(&self) -> Option<&MapHook<S>> {
        self.on_map_click.as_ref()
    }

    pub(crate) fn marker(&self, kind: PointerEventKind) -> Option<&MarkerHook<S>> {
        match kind {
            PointerEventKind::Click => self.on_marker_click.as_ref(),
            PointerEventKind::MouseEnter => self.on_marker_mouse_enter.as_ref(),
            PointerEventKind::MouseLeave => self.on_marker_mouse_leave.as_ref(),
        }
    }

    pub(crate) fn legend(&self, kind: PointerEventKind) -> Option<&MarkerHook<S>> {
        match kind {
            PointerEventKind::Click => self.on_marker_legend_click.as_ref(),
            PointerEventKind::MouseEnter => self.on_marker_legend_mouse_enter.as_ref(),
            PointerEventKind::MouseLeave => self.on_marker_legend_mouse_leave.as_ref(),
        }
    }
}

impl<S: MapSdk> Default for EventHooks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSdk> Clone for EventHooks<S> {
    fn clone(&self) -> Self {
        Self {
            on_map_click: self.on_map_click.clone(),
            on_marker_click: self.on_marker_click.clone(),
            on_marker_mouse_enter: self.on_marker_mouse_enter.clone(),
            on_marker_mouse_leave: self.on_marker_mouse_leave.clone(),
            on_marker_legend_click: self.on_marker_legend_click.clone(),
            on_marker_legend_mouse_enter: self.on_marker_legend_mouse_enter.clone(),
            on_marker_legend_mouse_leave: self.on_marker_legend_mouse_leave.clone(),
        }
    }
}

impl<S: MapSdk> fmt::Debug for EventHooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("on_map_click", &self.on_map_click.is_some())
            .field("on_marker_click", &self.on_marker_click.is_some())
            .field("on_marker_mouse_enter", &self.on_marker_mouse_enter.is_some())
            .field("on_marker_mouse_leave", &self.on_marker_mouse_leave.is_some())
            .field("on_marker_legend_click", &self.on_marker_legend_click.is_some())
            .field(
                "on_marker_legend_mouse_enter",
                &self.on_marker_legend_mouse_enter.is_some(),
            )
            .field(
                "on_marker_legend_mouse_leave",
                &self.on_marker_legend_mouse_leave.is_some(),
            )
            .finish()
    }
}

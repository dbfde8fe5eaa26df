//! Event data and routing
//!
//! All event delivery is external: the host observes native SDK and DOM
//! events and feeds them into the map instance, which routes each one to
//! the single corresponding user hook. The types here are the data that
//! crosses that boundary.

pub mod hooks;
pub mod router;

// Re-export the essential types
pub use hooks::{EventHooks, MapHook, MarkerHook};
pub use router::EventRouter;

use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Which native event fired, independent of its source naming.
///
/// SDK `mouseover`/`mouseout` and DOM `mouseenter`/`mouseleave` both map
/// onto the enter/leave pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl PointerEventKind {
    /// Maps a native event name onto a kind, `None` for names the adapter
    /// does not route
    pub fn from_native(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Self::Click),
            "mouseover" | "mouseenter" => Some(Self::MouseEnter),
            "mouseout" | "mouseleave" => Some(Self::MouseLeave),
            _ => None,
        }
    }
}

/// Native-event stand-in passed through to hooks untouched.
///
/// Whatever position data the host extracted from the native event rides
/// along; the adapter never inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub lat_lng: Option<LatLng>,
    pub pixel: Option<Point>,
}

impl PointerEvent {
    /// An event with no position data
    pub fn new() -> Self {
        Self::default()
    }

    /// An event carrying the geographic position it fired at
    pub fn at_position(lat_lng: LatLng) -> Self {
        Self {
            lat_lng: Some(lat_lng),
            pixel: None,
        }
    }

    pub fn with_pixel(mut self, pixel: Point) -> Self {
        self.pixel = Some(pixel);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_event_names() {
        assert_eq!(
            PointerEventKind::from_native("click"),
            Some(PointerEventKind::Click)
        );
        assert_eq!(
            PointerEventKind::from_native("mouseover"),
            Some(PointerEventKind::MouseEnter)
        );
        assert_eq!(
            PointerEventKind::from_native("mouseenter"),
            Some(PointerEventKind::MouseEnter)
        );
        assert_eq!(
            PointerEventKind::from_native("mouseout"),
            Some(PointerEventKind::MouseLeave)
        );
        assert_eq!(
            PointerEventKind::from_native("mouseleave"),
            Some(PointerEventKind::MouseLeave)
        );
        assert_eq!(PointerEventKind::from_native("dblclick"), None);
    }

    #[test]
    fn test_pointer_event_positions() {
        let event = PointerEvent::at_position(LatLng::new(40.7, -74.0))
            .with_pixel(Point::new(120.0, 80.0));
        assert_eq!(event.lat_lng, Some(LatLng::new(40.7, -74.0)));
        assert_eq!(event.pixel, Some(Point::new(120.0, 80.0)));

        assert_eq!(PointerEvent::new().lat_lng, None);
    }
}

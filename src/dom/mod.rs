//! DOM collaborator seam
//!
//! The adapter never walks a real document tree itself; it consumes two
//! narrow traits instead:
//! - [`ElementRef`] reads raw attributes off a single element and exposes a
//!   stable identity,
//! - [`Dom`] resolves a selector string to elements in document order.
//!
//! Hosts implement these against their own environment. The crate ships an
//! in-memory reference implementation ([`MemoryDom`]/[`MemoryElement`]) so
//! the adapter is usable and testable headless.

pub mod attrs;
pub mod memory;
pub mod registry;

pub use attrs::DataAttrExt;
pub use memory::{MemoryDom, MemoryElement};
pub use registry::MapRegistry;

use serde::{Deserialize, Serialize};

/// Stable identity of a DOM element, used for back-references and the
/// instance registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// A single element the adapter can read attributes from
pub trait ElementRef {
    /// Reads a raw attribute value, `None` when the attribute is absent
    fn attr(&self, name: &str) -> Option<String>;

    /// Stable identity of this element
    fn id(&self) -> ElementId;
}

/// A document the adapter can resolve selectors against
pub trait Dom {
    type Element: ElementRef;

    /// Returns all elements matching `selector`, in document order
    fn select(&self, selector: &str) -> Vec<Self::Element>;
}

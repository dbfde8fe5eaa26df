//! Typed reads of `data-*` attributes
//!
//! Raw attribute values are strings; configuration wants numbers, booleans
//! and pair values. [`DataAttrExt`] layers typed accessors over any
//! [`ElementRef`]. An attribute that is absent, empty, or unparsable reads
//! as `None`, so a broken attribute can never overwrite a caller-set option
//! during the merge.

use crate::{core::config::MarkerSource, dom::ElementRef};
use std::str::FromStr;

/// Typed `data-*` attribute reads for any element
pub trait DataAttrExt: ElementRef {
    /// Reads `data-{name}` as text; empty values read as absent
    fn data_text(&self, name: &str) -> Option<String> {
        let raw = self.attr(&format!("data-{}", name))?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Reads and parses `data-{name}`; parse failures read as absent
    fn data_parse<T: FromStr>(&self, name: &str) -> Option<T> {
        self.data_text(name)?.parse().ok()
    }

    /// Reads `data-{name}` as a boolean; only `"true"` and `"false"` parse
    fn data_boolean(&self, name: &str) -> Option<bool> {
        match self.data_text(name)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Reads `data-{name}` as a flag; anything but `"true"` is `false`
    fn data_flag(&self, name: &str) -> bool {
        self.data_boolean(name).unwrap_or(false)
    }

    /// Reads `data-markers` as either a JSON marker list or a selector
    fn data_markers(&self) -> Option<MarkerSource> {
        self.data_text("markers")
            .map(|raw| MarkerSource::from_attribute(&raw))
    }
}

impl<E: ElementRef + ?Sized> DataAttrExt for E {}

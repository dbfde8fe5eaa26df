//! Icon resolution
//!
//! A marker's icon is assembled from up to three levels, highest precedence
//! first: an explicit marker-level value, the source element's `data-*`
//! attributes, and the merged configuration's plugin-wide default. Each of
//! the four fields (url, size, origin, anchor) falls through the levels
//! independently. The url decides whether an icon exists at all: no url
//! from any level means no icon is forwarded, never a descriptor with a
//! missing url.

use crate::{
    core::{
        config::{MapConfig, MarkerObject},
        geo::{Point, Size},
    },
    dom::{attrs::DataAttrExt, ElementRef},
};
use serde::{Deserialize, Serialize};

/// Resolved icon forwarded to the SDK marker constructor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconDescriptor {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled_size: Option<Size>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Point>,
}

impl IconDescriptor {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            scaled_size: None,
            origin: None,
            anchor: None,
        }
    }

    pub fn with_scaled_size(mut self, size: Size) -> Self {
        self.scaled_size = Some(size);
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

/// One level of icon fields, before resolution.
///
/// Levels combine with [`IconFields::or`]; whichever level is applied first
/// wins field by field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconFields {
    pub url: Option<String>,
    pub size: Option<Size>,
    pub origin: Option<Point>,
    pub anchor: Option<Point>,
}

impl IconFields {
    /// The marker-level fields of an object-list entry
    pub fn from_object(object: &MarkerObject) -> Self {
        Self {
            url: object.icon.clone(),
            size: object.icon_size,
            origin: object.icon_origin,
            anchor: object.icon_anchor,
        }
    }

    /// The `data-icon*` attributes of a marker element or container
    pub fn from_element<E: ElementRef>(element: &E) -> Self {
        Self {
            url: element.data_text("icon"),
            size: element.data_parse("icon-size"),
            origin: element.data_parse("icon-origin"),
            anchor: element.data_parse("icon-anchor"),
        }
    }

    /// The plugin-wide defaults of the merged configuration
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            url: config.icon().map(str::to_string),
            size: config.icon_size(),
            origin: config.icon_origin(),
            anchor: config.icon_anchor(),
        }
    }

    /// Field-wise fallback: present fields win over `fallback`'s
    pub fn or(self, fallback: IconFields) -> IconFields {
        IconFields {
            url: self.url.or(fallback.url),
            size: self.size.or(fallback.size),
            origin: self.origin.or(fallback.origin),
            anchor: self.anchor.or(fallback.anchor),
        }
    }

    /// The complete descriptor, or `None` when no level supplied a url
    pub fn into_descriptor(self) -> Option<IconDescriptor> {
        let url = self.url?;
        Some(IconDescriptor {
            url,
            scaled_size: self.size,
            origin: self.origin,
            anchor: self.anchor,
        })
    }
}

/// Resolves one marker's icon through the full precedence chain:
/// marker-level value, then source-element attribute, then configured
/// default, per field.
pub fn resolve(
    marker: IconFields,
    element: IconFields,
    config: IconFields,
) -> Option<IconDescriptor> {
    marker.or(element).or(config).into_descriptor()
}

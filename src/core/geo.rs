use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a pixel offset in icon/screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a two-dimensional size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Error returned when a `"x,y"` pair string cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a \"x,y\" pair, got {input:?}")]
pub struct ParsePairError {
    input: String,
}

/// Splits a `"x,y"` string into two numeric components.
///
/// Exactly two comma-separated components are accepted; each is trimmed
/// before parsing.
fn parse_pair(value: &str) -> Result<(f64, f64), ParsePairError> {
    let error = || ParsePairError {
        input: value.to_string(),
    };

    let mut parts = value.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(first), Some(second), None) => {
            let x = first.trim().parse().map_err(|_| error())?;
            let y = second.trim().parse().map_err(|_| error())?;
            Ok((x, y))
        }
        _ => Err(error()),
    }
}

impl FromStr for Point {
    type Err = ParsePairError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_pair(value)?;
        Ok(Point::new(x, y))
    }
}

impl FromStr for Size {
    type Err = ParsePairError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_pair(value)?;
        Ok(Size::new(width, height))
    }
}

//! Geospatial utilities for the mural map.
//!
//! This crate provides:
//! - Coordinate normalization from Degrees-Minutes-Seconds text or decimal values
//! - DMS formatting of decimal degrees
//! - Haversine distance calculations
//! - Nearest-neighbour ranking with optional parallelism
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use muralmap_geo::{distance_km, normalize_coordinate, RawCoordinate};
//!
//! let lat = normalize_coordinate(&RawCoordinate::from("26° 8'34.88\"N")).unwrap();
//! let lng = normalize_coordinate(&RawCoordinate::from("91°47'37.03\"E")).unwrap();
//! assert!((lat - 26.143_022).abs() < 1e-5);
//!
//! // Dispur to Jorhat, roughly 250 km by air
//! let km = distance_km(lat, lng, 26.753_847, 94.207_331);
//! assert!(km > 200.0 && km < 300.0);
//! ```

mod dms;
mod haversine;
pub mod rank;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use dms::{format_dms, normalize_coordinate, parse_coordinate_text, parse_dms, Axis};
pub use haversine::{distance_km, haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};
pub use rank::{nearest, Positioned, Ranked};
pub use error::{GeoError, GeoErrorCode, Result};

use serde::{Deserialize, Serialize};

/// A geographic coordinate with latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Builds a coordinate from two raw values, or `None` if either one
    /// fails normalization or the result lies outside the valid range.
    pub fn from_raw(latitude: &RawCoordinate, longitude: &RawCoordinate) -> Option<Self> {
        let coord = Self::new(normalize_coordinate(latitude)?, normalize_coordinate(longitude)?);
        coord.is_valid().then_some(coord)
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// A single latitude or longitude as it appears in source data.
///
/// Records were entered incrementally, so a position is either a native
/// number already in decimal degrees or text (DMS like `26°54'37.80"N`, or a
/// plain decimal string).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCoordinate {
    /// Native number, already decimal degrees.
    Decimal(f64),
    /// DMS or decimal text.
    Text(String),
}

impl RawCoordinate {
    /// Reads a raw coordinate from an arbitrary JSON value.
    ///
    /// Numbers and strings are accepted; anything else (including `null`)
    /// yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(RawCoordinate::Decimal),
            serde_json::Value::String(s) => Some(RawCoordinate::Text(s.clone())),
            _ => None,
        }
    }
}

impl From<f64> for RawCoordinate {
    fn from(value: f64) -> Self {
        RawCoordinate::Decimal(value)
    }
}

impl From<&str> for RawCoordinate {
    fn from(value: &str) -> Self {
        RawCoordinate::Text(value.to_string())
    }
}

impl From<String> for RawCoordinate {
    fn from(value: String) -> Self {
        RawCoordinate::Text(value)
    }
}

impl std::fmt::Display for RawCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawCoordinate::Decimal(v) => write!(f, "{}", v),
            RawCoordinate::Text(s) => f.write_str(s),
        }
    }
}

//! WASM bindings for the geo crate.
//!
//! These bindings let the map page call the normalizer and ranker directly
//! from JavaScript.

use crate::{distance_km, nearest, normalize_coordinate, Coordinate, RawCoordinate};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Input position for ranking; either field may be DMS text or a number.
#[derive(Debug, Deserialize)]
struct RawPosition {
    lat: Option<RawCoordinate>,
    lng: Option<RawCoordinate>,
}

impl crate::Positioned for RawPosition {
    fn position(&self) -> Option<Coordinate> {
        Coordinate::from_raw(self.lat.as_ref()?, self.lng.as_ref()?)
    }
}

#[derive(Debug, Serialize)]
struct RankedPosition {
    index: usize,
    latitude: f64,
    longitude: f64,
    distance_km: f64,
}

/// Convert a DMS or decimal string to decimal degrees.
///
/// # Returns
/// The decimal value, or `undefined` when the text is not a coordinate
#[wasm_bindgen(js_name = dmsToDecimal)]
pub fn dms_to_decimal(dms: &str) -> Option<f64> {
    normalize_coordinate(&RawCoordinate::from(dms))
}

/// Calculate distance between two coordinates.
///
/// # Returns
/// Distance in kilometers
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    distance_km(lat1, lng1, lat2, lng2)
}

/// Rank positions by distance from the user.
///
/// # Arguments
/// * `user_lat` - User's latitude
/// * `user_lng` - User's longitude
/// * `positions_json` - JSON array of `{"lat": .., "lng": ..}` objects
/// * `limit` - Maximum results to return
///
/// # Returns
/// JSON array of `{index, latitude, longitude, distance_km}`, nearest first
#[wasm_bindgen(js_name = rankPositions)]
pub fn rank_positions(user_lat: f64, user_lng: f64, positions_json: &str, limit: u32) -> Result<String, JsValue> {
    let positions: Vec<RawPosition> = serde_json::from_str(positions_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let results: Vec<RankedPosition> = nearest(&Coordinate::new(user_lat, user_lng), &positions, limit as usize)
        .into_iter()
        .map(|r| RankedPosition {
            index: r.index,
            latitude: r.coordinate.latitude,
            longitude: r.coordinate.longitude,
            distance_km: r.distance_km,
        })
        .collect();

    serde_json::to_string(&results)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

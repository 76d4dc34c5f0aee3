//! Mural record data model

use crate::classify::{classify, marker_color, CityToken, MarkerColor};
use muralmap_geo::{Coordinate, Positioned, RawCoordinate};
use serde::{Deserialize, Deserializer, Serialize};

/// One mural as loaded from the catalog.
///
/// Field names follow the JSON catalog (`lat`, `lng`, `locationDesc`).
/// Coordinates are kept raw; see [`MuralRecord::coordinate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuralRecord {
    pub name: String,

    #[serde(
        rename = "lat",
        alias = "latitude",
        default,
        deserialize_with = "lenient_coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub latitude: Option<RawCoordinate>,

    #[serde(
        rename = "lng",
        alias = "longitude",
        default,
        deserialize_with = "lenient_coordinate",
        skip_serializing_if = "Option::is_none"
    )]
    pub longitude: Option<RawCoordinate>,

    #[serde(
        rename = "locationDesc",
        alias = "locationDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_desc: Option<String>,

    /// Explicit city token, authoritative over keyword inference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Free-text tag such as "Marked"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Image file names in display order
    #[serde(default)]
    pub images: Vec<String>,
}

/// Accept a number, a string, or anything else as "no coordinate".
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<RawCoordinate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(RawCoordinate::from_json(&value))
}

impl MuralRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latitude: None,
            longitude: None,
            location_desc: None,
            city: None,
            description: None,
            artist: None,
            status: None,
            images: Vec::new(),
        }
    }

    pub fn with_position(mut self, latitude: impl Into<RawCoordinate>, longitude: impl Into<RawCoordinate>) -> Self {
        self.latitude = Some(latitude.into());
        self.longitude = Some(longitude.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_desc = Some(location.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Decimal position, or `None` if either half is missing, malformed or
    /// out of range.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_raw(self.latitude.as_ref()?, self.longitude.as_ref()?)
    }

    /// Resolved city token
    pub fn city_token(&self) -> CityToken {
        classify(self.location_desc.as_deref(), self.city.as_deref())
    }

    pub fn marker_color(&self) -> MarkerColor {
        marker_color(self.location_desc.as_deref())
    }

    /// Trimmed artist credit, `None` when blank
    pub fn artist_credit(&self) -> Option<&str> {
        self.artist.as_deref().map(str::trim).filter(|a| !a.is_empty())
    }

    /// Location description or a placeholder for display
    pub fn location_label(&self) -> &str {
        self.location_desc
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or("Unknown location")
    }
}

impl Positioned for MuralRecord {
    fn position(&self) -> Option<Coordinate> {
        let coordinate = self.coordinate();
        if coordinate.is_none() {
            tracing::debug!(name = %self.name, "Skipping mural without usable coordinates");
        }
        coordinate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_dms_record() {
        let record: MuralRecord = serde_json::from_value(json!({
            "name": "Zubeen Da's Blessing",
            "lat": "26° 8'34.88\"N",
            "lng": "91°47'37.03\"E",
            "locationDesc": "Dispur (Guwahati) - Flyover I",
            "artist": "Neelim Mahanta and Team",
            "status": "Marked",
            "images": ["Dispur_mural_1.jpg", "Dispur_mural_2.jpg"]
        }))
        .unwrap();

        let coord = record.coordinate().unwrap();
        assert!((coord.latitude - 26.143_022).abs() < 1e-5);
        assert!((coord.longitude - 91.793_619).abs() < 1e-5);
        assert_eq!(record.images, vec!["Dispur_mural_1.jpg", "Dispur_mural_2.jpg"]);
        assert_eq!(record.city_token(), "guwahati");
    }

    #[test]
    fn test_deserialize_decimal_and_aliases() {
        let record: MuralRecord = serde_json::from_value(json!({
            "name": "Decimal mural",
            "latitude": 26.75174597,
            "longitude": "94.2073",
            "locationDescription": "Somewhere"
        }))
        .unwrap();

        let coord = record.coordinate().unwrap();
        assert_eq!(coord.latitude, 26.75174597);
        assert_eq!(coord.longitude, 94.2073);
        assert!(record.images.is_empty());
    }

    #[test]
    fn test_unusable_coordinates_still_load() {
        let record: MuralRecord = serde_json::from_value(json!({
            "name": "Broken",
            "lat": null,
            "lng": {"deg": 94}
        }))
        .unwrap();

        assert!(record.latitude.is_none());
        assert!(record.longitude.is_none());
        assert!(record.coordinate().is_none());
        assert!(record.position().is_none());
    }

    #[test]
    fn test_bad_text_coordinate() {
        let record = MuralRecord::new("Bad").with_position("not a coordinate", 94.0);
        assert!(record.coordinate().is_none());
    }

    #[test]
    fn test_artist_credit() {
        assert_eq!(MuralRecord::new("a").with_artist("  Ojantric ").artist_credit(), Some("Ojantric"));
        assert_eq!(MuralRecord::new("a").with_artist("   ").artist_credit(), None);
        assert_eq!(MuralRecord::new("a").artist_credit(), None);
    }

    #[test]
    fn test_location_label() {
        assert_eq!(MuralRecord::new("a").location_label(), "Unknown location");
        assert_eq!(MuralRecord::new("a").with_location("Rangia college").location_label(), "Rangia college");
    }

    #[test]
    fn test_serialize_uses_catalog_names() {
        let record = MuralRecord::new("x").with_position("1°0'0\"N", 2.0).with_location("here");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["lat"], json!("1°0'0\"N"));
        assert_eq!(value["lng"], json!(2.0));
        assert_eq!(value["locationDesc"], json!("here"));
        assert!(value.get("city").is_none());
    }
}

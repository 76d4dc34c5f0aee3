//! Map marker emission

use crate::classify::MarkerColor;
use crate::record::MuralRecord;
use muralmap_geo::Positioned;
use serde::Serialize;

/// What the map renderer needs for one pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Catalog index, for focusing and detail lookups
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub color: MarkerColor,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One marker per record with usable coordinates, in catalog order.
///
/// Records without a position produce nothing.
pub fn map_markers(records: &[MuralRecord]) -> Vec<MapMarker> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let position = record.position()?;
            Some(MapMarker {
                index,
                latitude: position.latitude,
                longitude: position.longitude,
                color: record.marker_color(),
                name: record.name.clone(),
                location: record.location_desc.clone(),
                artist: record.artist_credit().map(str::to_string),
                description: record.description.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_invalid_records_emit_nothing() {
        let records = vec![
            MuralRecord::new("skip me").with_position("26°N", "91°E"),
            MuralRecord::new("Rockstar Zubeen da")
                .with_position("27°28'28.28\"N", "94°56'30.71\"E")
                .with_location("Dibrugarh Convoy Road"),
        ];

        let markers = map_markers(&records);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].index, 1);
        assert_eq!(markers[0].color, MarkerColor::Town);
        assert!((markers[0].latitude - 27.474_522).abs() < 1e-5);
    }

    #[test]
    fn test_builtin_markers() {
        let catalog = Catalog::builtin().unwrap();
        let markers = map_markers(catalog.records());
        assert_eq!(markers.len(), 30);

        let red = markers.iter().filter(|m| m.color == MarkerColor::MajorCity).count();
        let blue = markers.iter().filter(|m| m.color == MarkerColor::Town).count();
        assert_eq!(red, 5);
        assert_eq!(blue, 9);
    }

    #[test]
    fn test_marker_serializes_color_token() {
        let records = vec![MuralRecord::new("x").with_position(26.0, 92.0)];
        let json = serde_json::to_value(&map_markers(&records)[0]).unwrap();
        assert_eq!(json["color"], "other");
        assert!(json.get("artist").is_none());
    }
}

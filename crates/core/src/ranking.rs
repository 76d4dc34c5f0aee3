//! Distance ranking over mural records

use crate::record::MuralRecord;
use muralmap_geo::{rank, Coordinate, Ranked};

/// At most `k` murals closest to the user, nearest first.
///
/// Murals without usable coordinates are left out; ties keep catalog order.
/// An empty result is a normal outcome.
pub fn nearest_murals(records: &[MuralRecord], user_lat: f64, user_lng: f64, k: usize) -> Vec<Ranked<&MuralRecord>> {
    let origin = Coordinate::new(user_lat, user_lng);
    let ranked = rank::nearest(&origin, records, k);
    tracing::debug!(k, found = ranked.len(), "Ranked murals by distance");
    ranked
}

/// Every mural within `radius_km` of the user, nearest first.
pub fn murals_within(records: &[MuralRecord], user_lat: f64, user_lng: f64, radius_km: f64) -> Vec<Ranked<&MuralRecord>> {
    rank::within_radius(&Coordinate::new(user_lat, user_lng), records, radius_km)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    // Dispur flyover, close to the first two Guwahati murals
    const USER_LAT: f64 = 26.1430;
    const USER_LNG: f64 = 91.7936;

    #[test]
    fn test_nearest_from_dispur() {
        let catalog = Catalog::builtin().unwrap();
        let ranked = nearest_murals(catalog.records(), USER_LAT, USER_LNG, 5);

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].item.name, "Zubeen Da's Blessing");
        assert!(ranked[0].distance_km < 0.1);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
    }

    #[test]
    fn test_invalid_records_skipped() {
        let records = vec![
            MuralRecord::new("broken").with_position("", "91°47'37.03\"E"),
            MuralRecord::new("ok").with_position(26.2, 91.8),
        ];

        let ranked = nearest_murals(&records, USER_LAT, USER_LNG, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.name, "ok");
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn test_no_valid_coordinates_is_empty() {
        let records = vec![MuralRecord::new("a"), MuralRecord::new("b").with_position("x", "y")];
        assert!(nearest_murals(&records, USER_LAT, USER_LNG, 5).is_empty());
    }

    #[test]
    fn test_murals_within() {
        let catalog = Catalog::builtin().unwrap();
        let close = murals_within(catalog.records(), USER_LAT, USER_LNG, 0.5);
        let names: Vec<_> = close.iter().map(|r| r.item.name.as_str()).collect();
        assert_eq!(names, vec!["Zubeen Da's Blessing", "Long hair Zubeen Da Mural"]);
    }

    proptest! {
        #[test]
        fn prop_bounded_by_k_and_valid_count(lat in -90.0f64..90.0, lng in -180.0f64..180.0, k in 0usize..40) {
            let catalog = Catalog::builtin().unwrap();
            let valid = catalog.iter().filter(|r| r.coordinate().is_some()).count();
            let ranked = nearest_murals(catalog.records(), lat, lng, k);
            prop_assert!(ranked.len() <= k);
            prop_assert!(ranked.len() <= valid);
        }
    }
}

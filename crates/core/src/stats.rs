//! Catalog statistics

use crate::classify::CityToken;
use crate::record::MuralRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Aggregate counts over the whole catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total_murals: usize,
    /// Distinct city tokens, `"other"` counting as one
    pub cities: usize,
    /// Distinct non-blank artist credits, exact match after trimming
    pub artists: usize,
    pub images: usize,
}

/// Murals per city token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: CityToken,
    pub murals: usize,
}

/// Count murals, cities, artists and images.
///
/// Records without usable coordinates are counted like any other.
pub fn aggregate_stats(records: &[MuralRecord]) -> CatalogStats {
    let cities: HashSet<CityToken> = records.iter().map(MuralRecord::city_token).collect();
    let artists: HashSet<&str> = records.iter().filter_map(MuralRecord::artist_credit).collect();

    CatalogStats {
        total_murals: records.len(),
        cities: cities.len(),
        artists: artists.len(),
        images: records.iter().map(|r| r.images.len()).sum(),
    }
}

/// Murals per city, in order of first appearance.
pub fn city_breakdown(records: &[MuralRecord]) -> Vec<CityCount> {
    let mut counts: Vec<CityCount> = Vec::new();
    for token in records.iter().map(MuralRecord::city_token) {
        match counts.iter_mut().find(|c| c.city == token) {
            Some(entry) => entry.murals += 1,
            None => counts.push(CityCount { city: token, murals: 1 }),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(aggregate_stats(&[]), CatalogStats::default());
        assert!(city_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_counts() {
        let records = vec![
            MuralRecord::new("a").with_location("Guwahati").with_artist("Kapil Das").with_images(["1.jpg", "2.jpg"]),
            MuralRecord::new("b").with_location("Dispur").with_artist(" Kapil Das ").with_images(["3.jpg"]),
            MuralRecord::new("c").with_location("Rangia").with_artist("Kapil Das & Team"),
            MuralRecord::new("d").with_location("Joysagar").with_artist("  "),
            MuralRecord::new("e").with_position("garbage", "").with_city("Jorhat"),
        ];

        let stats = aggregate_stats(&records);
        assert_eq!(stats.total_murals, 5);
        // guwahati, other, jorhat
        assert_eq!(stats.cities, 3);
        assert_eq!(stats.artists, 2);
        assert_eq!(stats.images, 3);
    }

    #[test]
    fn test_builtin_stats() {
        let catalog = Catalog::builtin().unwrap();
        let stats = aggregate_stats(catalog.records());
        assert_eq!(stats.total_murals, 30);
        assert_eq!(stats.cities, 9);
        assert_eq!(stats.artists, 27);
        assert_eq!(stats.images, 36);
    }

    #[test]
    fn test_city_breakdown_order() {
        let records = vec![
            MuralRecord::new("a").with_location("Tezpur"),
            MuralRecord::new("b").with_location("Guwahati"),
            MuralRecord::new("c").with_location("Dolabari flyover: Tezpur"),
        ];

        let breakdown = city_breakdown(&records);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].city, "tezpur");
        assert_eq!(breakdown[0].murals, 2);
        assert_eq!(breakdown[1].city, "guwahati");
    }
}

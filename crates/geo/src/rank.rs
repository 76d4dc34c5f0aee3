//! Nearest-neighbour ranking with optional parallelism.
//!
//! Items that cannot produce a valid position are dropped from the ranking;
//! they never abort it. Ties keep the original collection order.

use crate::{haversine_distance, Coordinate};
use serde::Serialize;
use std::cmp::Ordering;

/// Anything that may carry a position in decimal degrees.
pub trait Positioned {
    /// The item's position, or `None` when it has no usable coordinates.
    fn position(&self) -> Option<Coordinate>;
}

impl Positioned for Coordinate {
    fn position(&self) -> Option<Coordinate> {
        self.is_valid().then_some(*self)
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Option<Coordinate> {
        (**self).position()
    }
}

/// An item paired with its distance from the query origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked<T> {
    /// Index of the item in the input slice
    pub index: usize,
    /// The ranked item
    pub item: T,
    /// The item's normalized position
    pub coordinate: Coordinate,
    /// Great-circle distance from the origin in kilometers
    pub distance_km: f64,
}

/// Return at most `k` items closest to `origin`, nearest first.
///
/// # Example
/// ```
/// use muralmap_geo::{nearest, Coordinate};
///
/// let points = vec![
///     Coordinate::new(27.47, 94.91), // Dibrugarh
///     Coordinate::new(26.14, 91.79), // Dispur
///     Coordinate::new(26.75, 94.21), // Jorhat
/// ];
///
/// let ranked = nearest(&Coordinate::new(26.18, 91.75), &points, 2);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].index, 1);
/// assert_eq!(ranked[1].index, 2);
/// ```
pub fn nearest<'a, T>(origin: &Coordinate, items: &'a [T], k: usize) -> Vec<Ranked<&'a T>>
where
    T: Positioned + Sync,
{
    if k == 0 {
        return Vec::new();
    }

    let mut ranked = rank_all(origin, items);
    ranked.truncate(k);
    ranked
}

/// Return every item within `radius_km` of `origin`, nearest first.
pub fn within_radius<'a, T>(origin: &Coordinate, items: &'a [T], radius_km: f64) -> Vec<Ranked<&'a T>>
where
    T: Positioned + Sync,
{
    let mut ranked = rank_all(origin, items);
    ranked.retain(|r| r.distance_km <= radius_km);
    ranked
}

/// Rank every positioned item by ascending distance.
pub fn rank_all<'a, T>(origin: &Coordinate, items: &'a [T]) -> Vec<Ranked<&'a T>>
where
    T: Positioned + Sync,
{
    let mut ranked = measure_all(origin, items);
    ranked.sort_by(compare_ranked);
    ranked
}

fn compare_ranked<T>(a: &Ranked<T>, b: &Ranked<T>) -> Ordering {
    a.distance_km
        .total_cmp(&b.distance_km)
        .then_with(|| a.index.cmp(&b.index))
}

fn measure_all<'a, T>(origin: &Coordinate, items: &'a [T]) -> Vec<Ranked<&'a T>>
where
    T: Positioned + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items
            .par_iter()
            .enumerate()
            .filter_map(|(index, item)| measure(origin, index, item))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| measure(origin, index, item))
            .collect()
    }
}

#[inline]
fn measure<'a, T: Positioned>(origin: &Coordinate, index: usize, item: &'a T) -> Option<Ranked<&'a T>> {
    let coordinate = item.position()?;
    Some(Ranked {
        index,
        item,
        coordinate,
        distance_km: haversine_distance(origin, &coordinate),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug)]
    struct Site {
        name: &'static str,
        position: Option<Coordinate>,
    }

    impl Positioned for Site {
        fn position(&self) -> Option<Coordinate> {
            self.position
        }
    }

    fn create_test_sites() -> Vec<Site> {
        vec![
            Site { name: "dibrugarh", position: Some(Coordinate::new(27.4745, 94.9419)) },
            Site { name: "unknown", position: None },
            Site { name: "dispur", position: Some(Coordinate::new(26.1430, 91.7936)) },
            Site { name: "jorhat", position: Some(Coordinate::new(26.7538, 94.2073)) },
            Site { name: "dispur-twin", position: Some(Coordinate::new(26.1430, 91.7936)) },
        ]
    }

    const USER_IN_GUWAHATI: Coordinate = Coordinate { latitude: 26.18, longitude: 91.75 };

    #[test]
    fn test_sorted_by_distance() {
        let sites = create_test_sites();
        let ranked = nearest(&USER_IN_GUWAHATI, &sites, 5);

        let names: Vec<_> = ranked.iter().map(|r| r.item.name).collect();
        assert_eq!(names, vec!["dispur", "dispur-twin", "jorhat", "dibrugarh"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let sites = create_test_sites();
        let ranked = nearest(&USER_IN_GUWAHATI, &sites, 2);

        assert_eq!(ranked[0].distance_km, ranked[1].distance_km);
        assert_eq!(ranked[0].index, 2);
        assert_eq!(ranked[1].index, 4);
    }

    #[test]
    fn test_invalid_positions_skipped() {
        let sites = create_test_sites();
        let ranked = nearest(&USER_IN_GUWAHATI, &sites, 10);
        assert_eq!(ranked.len(), 4);
        assert!(ranked.iter().all(|r| r.item.name != "unknown"));
    }

    #[test]
    fn test_truncates_to_k() {
        let sites = create_test_sites();
        assert_eq!(nearest(&USER_IN_GUWAHATI, &sites, 1).len(), 1);
        assert!(nearest(&USER_IN_GUWAHATI, &sites, 0).is_empty());
    }

    #[test]
    fn test_no_valid_positions_is_empty() {
        let sites = vec![Site { name: "nowhere", position: None }];
        assert!(nearest(&USER_IN_GUWAHATI, &sites, 5).is_empty());
        assert!(nearest::<Site>(&USER_IN_GUWAHATI, &[], 5).is_empty());
    }

    #[test]
    fn test_within_radius() {
        let sites = create_test_sites();
        let ranked = within_radius(&USER_IN_GUWAHATI, &sites, 50.0);
        let names: Vec<_> = ranked.iter().map(|r| r.item.name).collect();
        assert_eq!(names, vec!["dispur", "dispur-twin"]);
    }

    #[test]
    fn test_out_of_range_coordinate_not_positioned() {
        let points = vec![Coordinate::new(120.0, 0.0), Coordinate::new(10.0, 10.0)];
        let ranked = nearest(&Coordinate::new(0.0, 0.0), &points, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].index, 1);
    }

    proptest! {
        #[test]
        fn prop_ranking_sorted_and_bounded(
            points in proptest::collection::vec((-90.0f64..90.0, -180.0f64..180.0), 0..40),
            k in 0usize..10,
        ) {
            let coords: Vec<Coordinate> = points.into_iter().map(Coordinate::from).collect();
            let ranked = nearest(&Coordinate::new(26.0, 92.0), &coords, k);

            prop_assert!(ranked.len() <= k);
            prop_assert!(ranked.len() <= coords.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].distance_km <= pair[1].distance_km);
            }
        }
    }
}

//! City filter

use crate::classify::CityToken;
use crate::record::MuralRecord;

/// Records whose resolved city token equals `city`, in catalog order.
///
/// Matching is exact on the token (case-insensitive), never a substring
/// test. An unknown token yields an empty result.
pub fn filter_by_city<'a>(records: &'a [MuralRecord], city: &str) -> Vec<&'a MuralRecord> {
    let wanted = CityToken::new(city);
    records.iter().filter(|record| record.city_token() == wanted).collect()
}

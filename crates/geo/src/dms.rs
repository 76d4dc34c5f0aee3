//! Degrees-Minutes-Seconds parsing and formatting.
//!
//! Supports:
//! - DMS text: `26°54'37.80"N`, whitespace anywhere (`26° 8'34.88"N`)
//! - Plain decimal text: `"26.75174597"`
//! - Native decimal numbers, passed through unchanged

use crate::{GeoError, RawCoordinate, Result};

/// Delimiters between the degree, minute and second groups.
const DMS_DELIMITERS: [char; 3] = ['°', '\'', '"'];

/// Fixed-point resolution of formatted seconds (4 decimal places).
const SECOND_FRACTION_UNITS: u64 = 10_000;

/// Which axis a value belongs to; decides the hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// North/South
    Latitude,
    /// East/West
    Longitude,
}

impl Axis {
    fn hemisphere(self, negative: bool) -> char {
        match (self, negative) {
            (Axis::Latitude, false) => 'N',
            (Axis::Latitude, true) => 'S',
            (Axis::Longitude, false) => 'E',
            (Axis::Longitude, true) => 'W',
        }
    }
}

/// Normalize a raw coordinate into decimal degrees.
///
/// Invalid input is reported as `None`, never as zero, so callers can skip
/// the record and carry on.
///
/// # Example
/// ```
/// use muralmap_geo::{normalize_coordinate, RawCoordinate};
///
/// assert_eq!(normalize_coordinate(&RawCoordinate::from(26.75174597)), Some(26.75174597));
///
/// let lng = normalize_coordinate(&RawCoordinate::from("91°47'37.03\"E")).unwrap();
/// assert!((lng - 91.793_619).abs() < 1e-5);
///
/// assert_eq!(normalize_coordinate(&RawCoordinate::from("not a coordinate")), None);
/// ```
pub fn normalize_coordinate(value: &RawCoordinate) -> Option<f64> {
    match value {
        RawCoordinate::Decimal(v) => v.is_finite().then_some(*v),
        RawCoordinate::Text(text) => parse_coordinate_text(text).ok(),
    }
}

/// Parse coordinate text that is either DMS or a plain decimal number.
///
/// Text without any of the `°`, `'`, `"` markers is read as decimal degrees.
pub fn parse_coordinate_text(text: &str) -> Result<f64> {
    let compact = strip_whitespace(text);

    if compact.is_empty() {
        return Err(GeoError::Empty);
    }

    if !compact.contains(DMS_DELIMITERS) {
        return parse_finite(&compact)
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("Not a decimal number: {}", text.trim())));
    }

    parse_compact_dms(&compact)
}

/// Parse a DMS string of the form `D°M'S"H` into decimal degrees.
///
/// Whitespace is ignored everywhere, including inside numeral groups.
/// `S` and `W` negate the result.
pub fn parse_dms(dms: &str) -> Result<f64> {
    let compact = strip_whitespace(dms);

    if compact.is_empty() {
        return Err(GeoError::Empty);
    }

    parse_compact_dms(&compact)
}

fn parse_compact_dms(compact: &str) -> Result<f64> {
    let parts: Vec<&str> = compact
        .split(DMS_DELIMITERS)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 4 {
        return Err(GeoError::InvalidDms(format!(
            "Expected degrees, minutes, seconds and hemisphere, got {} part(s) in {}",
            parts.len(),
            compact
        )));
    }

    let degrees = parse_component("degrees", parts[0])?;
    let minutes = parse_component("minutes", parts[1])?;
    let seconds = parse_component("seconds", parts[2])?;

    let sign = match parts[3] {
        "N" | "E" => 1.0,
        "S" | "W" => -1.0,
        other => return Err(GeoError::InvalidHemisphere(other.to_string())),
    };

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

fn parse_component(name: &str, part: &str) -> Result<f64> {
    match parse_finite(part) {
        Some(value) if value >= 0.0 => Ok(value),
        Some(_) => Err(GeoError::InvalidDms(format!("Negative {}: {}", name, part))),
        None => Err(GeoError::InvalidDms(format!("Invalid {}: {}", name, part))),
    }
}

#[inline]
fn parse_finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[inline]
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Format decimal degrees as DMS text, e.g. `26°8'34.8800"N`.
///
/// Seconds carry four decimal places, which keeps a format/parse round trip
/// within 1e-7 degrees. Returns `None` for non-finite input.
pub fn format_dms(value: f64, axis: Axis) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let units_per_degree = 3600 * SECOND_FRACTION_UNITS;
    let units_per_minute = 60 * SECOND_FRACTION_UNITS;
    let total = (value.abs() * units_per_degree as f64).round() as u64;

    let degrees = total / units_per_degree;
    let minutes = (total % units_per_degree) / units_per_minute;
    let second_units = total % units_per_minute;

    Some(format!(
        "{}°{}'{}.{:04}\"{}",
        degrees,
        minutes,
        second_units / SECOND_FRACTION_UNITS,
        second_units % SECOND_FRACTION_UNITS,
        axis.hemisphere(value < 0.0)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn text(s: &str) -> RawCoordinate {
        RawCoordinate::from(s)
    }

    #[test]
    fn test_decimal_passthrough() {
        assert_eq!(normalize_coordinate(&RawCoordinate::from(26.75174597)), Some(26.75174597));
        assert_eq!(normalize_coordinate(&RawCoordinate::from(-3.5)), Some(-3.5));
    }

    #[test]
    fn test_non_finite_decimal_rejected() {
        assert_eq!(normalize_coordinate(&RawCoordinate::from(f64::NAN)), None);
        assert_eq!(normalize_coordinate(&RawCoordinate::from(f64::INFINITY)), None);
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(normalize_coordinate(&text("26.75174597")), Some(26.75174597));
        assert_eq!(normalize_coordinate(&text(" -91.5 ")), Some(-91.5));
    }

    #[test]
    fn test_dms_with_embedded_whitespace() {
        let value = normalize_coordinate(&text("26° 8'34.88\"N")).unwrap();
        let expected = 26.0 + 8.0 / 60.0 + 34.88 / 3600.0;
        assert!((value - expected).abs() < 1e-12);
        assert!((value - 26.143_022).abs() < 1e-6);
    }

    #[test]
    fn test_dms_east_is_positive() {
        let value = normalize_coordinate(&text("91°47'37.03\"E")).unwrap();
        assert!((value - 91.793_619).abs() < 1e-6);
    }

    #[test]
    fn test_dms_south_and_west_are_negative() {
        assert!(normalize_coordinate(&text("33°51'54.00\"S")).unwrap() < 0.0);
        assert!(normalize_coordinate(&text("0°7'39.00\"W")).unwrap() < 0.0);
    }

    #[test]
    fn test_whitespace_inside_numerals() {
        let value = normalize_coordinate(&text("2 6 ° 5 4 ' 3 7 . 8 0 \" N")).unwrap();
        assert!((value - 26.9105).abs() < 1e-9);
    }

    #[test]
    fn test_double_apostrophe_seconds() {
        let value = normalize_coordinate(&text("26°54'37.80''N")).unwrap();
        assert!((value - 26.9105).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(normalize_coordinate(&text("")), None);
        assert_eq!(normalize_coordinate(&text("   ")), None);
        assert_eq!(normalize_coordinate(&text("not a coordinate")), None);
        assert_eq!(normalize_coordinate(&text("26°54'N")), None);
        assert_eq!(normalize_coordinate(&text("26°x'37.80\"N")), None);
    }

    #[test]
    fn test_hemisphere_is_case_sensitive() {
        assert_eq!(parse_dms("26°54'37.80\"n"), Err(GeoError::InvalidHemisphere("n".to_string())));
        assert!(parse_dms("26°54'37.80\"Q").is_err());
    }

    #[test]
    fn test_negative_component_rejected() {
        assert!(matches!(parse_dms("-26°54'37.80\"N"), Err(GeoError::InvalidDms(_))));
    }

    #[test]
    fn test_trailing_segments_ignored() {
        let value = parse_dms("26°54'37.80\"N\"x").unwrap();
        assert!((value - 26.9105).abs() < 1e-9);
        assert_eq!(normalize_coordinate(&text("91°47'37.03\"E'extra")), parse_dms("91°47'37.03\"E").ok());
    }

    #[test]
    fn test_parse_errors_are_descriptive() {
        assert_eq!(parse_coordinate_text(""), Err(GeoError::Empty));
        assert!(matches!(parse_coordinate_text("abc"), Err(GeoError::InvalidCoordinate(_))));
        assert!(matches!(parse_coordinate_text("26°54'"), Err(GeoError::InvalidDms(_))));
    }

    #[test]
    fn test_format_dms() {
        let value = 26.0 + 8.0 / 60.0 + 34.88 / 3600.0;
        assert_eq!(format_dms(value, Axis::Latitude).unwrap(), "26°8'34.8800\"N");
        assert_eq!(format_dms(-0.5, Axis::Longitude).unwrap(), "0°30'0.0000\"W");
        assert!(format_dms(f64::NAN, Axis::Latitude).is_none());
    }

    #[test]
    fn test_format_carries_rounded_seconds() {
        // 59.99999 seconds rounds up into the next minute
        let value = 10.0 + 59.0 / 60.0 + 59.999_99 / 3600.0;
        assert_eq!(format_dms(value, Axis::Latitude).unwrap(), "11°0'0.0000\"N");
    }

    proptest! {
        #[test]
        fn prop_format_parse_round_trip(value in -90.0f64..90.0) {
            let formatted = format_dms(value, Axis::Latitude).unwrap();
            let parsed = parse_dms(&formatted).unwrap();
            prop_assert!((parsed - value).abs() < 1e-6, "{} -> {} -> {}", value, formatted, parsed);
        }

        #[test]
        fn prop_hemisphere_sign(d in 0u32..180, m in 0u32..60, s in 0.0f64..60.0) {
            let east = parse_dms(&format!("{}°{}'{}\"E", d, m, s)).unwrap();
            let west = parse_dms(&format!("{}°{}'{}\"W", d, m, s)).unwrap();
            prop_assert!(east >= 0.0);
            prop_assert!(west <= 0.0);
            prop_assert_eq!(east, -west);
        }

        #[test]
        fn prop_never_panics(input in ".*") {
            let _ = normalize_coordinate(&RawCoordinate::Text(input));
        }
    }
}

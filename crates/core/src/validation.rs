//! Catalog and configuration validation
//!
//! Validation never stops a record from being loaded. It reports what the
//! map and ranking will silently skip so data authors can fix it.
//!
//! # Example
//!
//! ```
//! use muralmap_core::{validation::validate_catalog, Catalog, MuralRecord};
//!
//! let catalog = Catalog::from_records(vec![
//!     MuralRecord::new("Rockstar Zubeen da").with_position("27°28'28.28\"N", "94°56'30.71\"E"),
//!     MuralRecord::new("Lost mural").with_position("", "94°56'30.71\"E"),
//! ]);
//!
//! let result = validate_catalog(&catalog);
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.errors()[0].record, Some(1));
//! ```

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::record::MuralRecord;
use muralmap_geo::{parse_coordinate_text, Coordinate, GeoError, GeoErrorCode, RawCoordinate};
use serde::{Deserialize, Serialize};

/// Validation error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Catalog index of the offending record, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,
    /// Expected value (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actual value (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl ValidationError {
    /// Create an error for a field
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
            record: None,
            expected: None,
            actual: None,
        }
    }

    /// Attach the catalog index of the record
    pub fn for_record(mut self, index: usize) -> Self {
        self.record = Some(index);
        self
    }

    /// Attach the expected value
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Attach the actual value
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.record {
            Some(index) => write!(f, "#{} {}: {}", index, self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }

    /// Merge another result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result type
    pub fn to_result(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(|e| e.to_string()).collect();
            Err(Error::validation(format!("Validation failed: {}", messages.join("; "))))
        }
    }
}

/// Validate every record in the catalog.
///
/// Errors: blank name, missing or unparseable latitude/longitude, position
/// out of range. Warnings: no images, no artist credit, location that falls
/// into the "other" bucket.
pub fn validate_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    for (index, record) in catalog.iter().enumerate() {
        result.merge(validate_record(index, record));
    }
    result
}

/// Validate a single record at its catalog index.
pub fn validate_record(index: usize, record: &MuralRecord) -> ValidationResult {
    let mut result = ValidationResult::new();

    if record.name.trim().is_empty() {
        result.add_error(ValidationError::new("name", "Name is required", "REQUIRED").for_record(index));
    }

    let latitude = check_coordinate(&mut result, index, "lat", record.latitude.as_ref());
    let longitude = check_coordinate(&mut result, index, "lng", record.longitude.as_ref());

    if let (Some(lat), Some(lng)) = (latitude, longitude) {
        if !Coordinate::new(lat, lng).is_valid() {
            result.add_error(
                ValidationError::new("position", "Position is outside the valid range", "RANGE")
                    .for_record(index)
                    .with_expected("latitude -90..90, longitude -180..180")
                    .with_actual(format!("{:.6}, {:.6}", lat, lng)),
            );
        }
    }

    if record.images.is_empty() {
        result.add_warning(ValidationError::new("images", "No images listed", "NO_IMAGES").for_record(index));
    }

    if record.artist_credit().is_none() {
        result.add_warning(ValidationError::new("artist", "No artist credit", "NO_ARTIST").for_record(index));
    }

    if record.city_token().is_other() {
        result.add_warning(
            ValidationError::new("locationDesc", "Location does not match any known city", "UNCLASSIFIED")
                .for_record(index)
                .with_actual(record.location_desc.clone().unwrap_or_default()),
        );
    }

    result
}

fn check_coordinate(
    result: &mut ValidationResult,
    index: usize,
    field: &str,
    raw: Option<&RawCoordinate>,
) -> Option<f64> {
    let parsed = match raw {
        None => Err(GeoError::Empty),
        Some(RawCoordinate::Decimal(v)) if v.is_finite() => Ok(*v),
        Some(RawCoordinate::Decimal(v)) => Err(GeoError::InvalidCoordinate(v.to_string())),
        Some(RawCoordinate::Text(text)) => parse_coordinate_text(text),
    };

    match parsed {
        Ok(value) => Some(value),
        Err(err) => {
            let mut error = ValidationError::new(field, err.to_string(), coordinate_error_code(&err))
                .for_record(index)
                .with_expected("D°M'S\"H or decimal degrees");
            if let Some(raw) = raw {
                error = error.with_actual(raw.to_string());
            }
            result.add_error(error);
            None
        }
    }
}

fn coordinate_error_code(err: &GeoError) -> &'static str {
    match err.code() {
        GeoErrorCode::Empty => "MISSING_COORDINATE",
        GeoErrorCode::InvalidHemisphere => "INVALID_HEMISPHERE",
        GeoErrorCode::InvalidDms | GeoErrorCode::InvalidCoordinate => "INVALID_COORDINATE",
    }
}

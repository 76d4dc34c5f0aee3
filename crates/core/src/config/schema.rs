//! Configuration schema definitions

use crate::validation::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid regex"));

/// Root configuration schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        if self.assistant.nearest_limit == 0 {
            result.add_error(ValidationError::new(
                "assistant.nearest_limit",
                "Must be at least 1",
                "RANGE",
            ));
        }

        if !(-90.0..=90.0).contains(&self.map.center_latitude) {
            result.add_error(
                ValidationError::new("map.center_latitude", "Must be between -90 and 90", "RANGE")
                    .with_actual(self.map.center_latitude.to_string()),
            );
        }

        if !(-180.0..=180.0).contains(&self.map.center_longitude) {
            result.add_error(
                ValidationError::new("map.center_longitude", "Must be between -180 and 180", "RANGE")
                    .with_actual(self.map.center_longitude.to_string()),
            );
        }

        for (field, value) in [
            ("map.major_city_color", &self.map.major_city_color),
            ("map.town_color", &self.map.town_color),
            ("map.other_color", &self.map.other_color),
        ] {
            if !HEX_COLOR.is_match(value) {
                result.add_error(
                    ValidationError::new(field, "Must be a hex colour like #e74c3c", "PATTERN")
                        .with_actual(value.clone()),
                );
            }
        }

        if self.general.image_dir.trim().is_empty() {
            result.add_warning(ValidationError::new(
                "general.image_dir",
                "Empty image directory; image paths will be bare file names",
                "WARNING",
            ));
        }

        result
    }
}

/// General site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Title shown in headers
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// JSON catalog to load instead of the bundled dataset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Directory (or URL prefix) holding the mural images
    #[serde(default = "default_image_dir")]
    pub image_dir: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            catalog_path: None,
            image_dir: default_image_dir(),
        }
    }
}

fn default_site_name() -> String {
    "Zubeen Garg Memorial Murals".to_string()
}

fn default_image_dir() -> String {
    "Images".to_string()
}

/// Map view configuration handed to the rendering side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_center_latitude")]
    pub center_latitude: f64,

    #[serde(default = "default_center_longitude")]
    pub center_longitude: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Zoom used when a single mural is focused
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    #[serde(default = "default_major_city_color")]
    pub major_city_color: String,

    #[serde(default = "default_town_color")]
    pub town_color: String,

    #[serde(default = "default_other_color")]
    pub other_color: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_latitude: default_center_latitude(),
            center_longitude: default_center_longitude(),
            zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            major_city_color: default_major_city_color(),
            town_color: default_town_color(),
            other_color: default_other_color(),
        }
    }
}

fn default_center_latitude() -> f64 {
    26.5
}

fn default_center_longitude() -> f64 {
    92.5
}

fn default_zoom() -> u8 {
    8
}

fn default_focus_zoom() -> u8 {
    15
}

fn default_major_city_color() -> String {
    "#e74c3c".to_string()
}

fn default_town_color() -> String {
    "#3498db".to_string()
}

fn default_other_color() -> String {
    "#2ecc71".to_string()
}

/// Assistant configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// How many murals a "near me" answer lists
    #[serde(default = "default_nearest_limit")]
    pub nearest_limit: usize,

    /// Zoom used to show the closest mural after a "near me" answer
    #[serde(default = "default_nearby_zoom")]
    pub nearby_zoom: u8,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            nearest_limit: default_nearest_limit(),
            nearby_zoom: default_nearby_zoom(),
        }
    }
}

fn default_nearest_limit() -> usize {
    5
}

fn default_nearby_zoom() -> u8 {
    12
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            show_target: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

//! Core library for the mural map
//!
//! This crate owns the mural catalog and every query the site and the
//! command-line guide run against it:
//!
//! - **Catalog**: read-only collection loaded from the bundled dataset or a JSON file
//! - **Classification**: city tokens and marker colours from one keyword table
//! - **Queries**: nearest murals, city filter, statistics, name lookup
//! - **Presentation data**: map markers, detail views, cleaned image paths
//! - **Assistant**: keyword intents answered with typed replies
//! - **Configuration**: TOML-based configuration with validation
//! - **Error handling**: errors with codes, context, and recovery suggestions
//!
//! # Example
//!
//! ```rust
//! use muralmap_core::prelude::*;
//!
//! let catalog = Catalog::builtin()?;
//!
//! let stats = aggregate_stats(catalog.records());
//! assert_eq!(stats.total_murals, catalog.len());
//!
//! // Murals closest to Jorhat
//! let nearest = nearest_murals(catalog.records(), 26.7538, 94.2073, 3);
//! assert_eq!(nearest[0].item.city_token(), "jorhat");
//!
//! let jorhat = filter_by_city(catalog.records(), "Jorhat");
//! assert_eq!(jorhat.len(), 2);
//! # Ok::<(), muralmap_core::Error>(())
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod assistant;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod filter;
pub mod images;
pub mod lookup;
pub mod markers;
pub mod ranking;
pub mod record;
pub mod stats;
pub mod validation;

pub use catalog::Catalog;
pub use error::{Error, ErrorCode, Result, ResultExt};
pub use record::MuralRecord;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::assistant::{fun_fact, Assistant, FunFact, GeolocationError, Intent, Reply, UserLocation};
    pub use crate::catalog::Catalog;
    pub use crate::classify::{classify, marker_color, resolve_city_query, CityToken, MarkerColor, CITY_TABLE};
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::filter::filter_by_city;
    pub use crate::images::{clean_image_file_name, image_path};
    pub use crate::lookup::{find_by_name, find_mentioned, MuralDetail};
    pub use crate::markers::{map_markers, MapMarker};
    pub use crate::ranking::{murals_within, nearest_murals};
    pub use crate::record::MuralRecord;
    pub use crate::stats::{aggregate_stats, city_breakdown, CatalogStats, CityCount};
    pub use crate::validation::{validate_catalog, ValidationError, ValidationResult};
    pub use muralmap_geo::{Coordinate, RawCoordinate, Ranked};
}

//! Location classification
//!
//! One ordered keyword table drives city tokens, marker colours and city
//! lookups from free text. Order matters: the first entry whose keyword is a
//! substring of the lower-cased text wins, so Guwahati (which owns the
//! `dispur` alias) is checked before any town.

use crate::config::MapConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token for locations that match no table entry.
pub const OTHER: &str = "other";

/// Normalized city token (trimmed, lower-cased).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityToken(String);

impl CityToken {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_lowercase())
    }

    /// The `"other"` bucket
    pub fn other() -> Self {
        Self(OTHER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_other(&self) -> bool {
        self.0 == OTHER
    }

    /// Display label from the table, or the token itself.
    pub fn label(&self) -> &str {
        CITY_TABLE
            .iter()
            .find(|entry| entry.token == self.0)
            .map(|entry| entry.label)
            .unwrap_or(self.0.as_str())
    }
}

impl fmt::Display for CityToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for CityToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CityToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Coarse size bucket, used for marker colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    MajorCity,
    Town,
}

/// A row of the keyword table.
#[derive(Debug, Clone, Copy)]
pub struct CityEntry {
    pub token: &'static str,
    pub label: &'static str,
    pub tier: Tier,
    /// Lower-case substrings that identify the city
    pub keywords: &'static [&'static str],
}

/// The authoritative keyword table, in match order.
pub static CITY_TABLE: &[CityEntry] = &[
    CityEntry { token: "guwahati", label: "Guwahati", tier: Tier::MajorCity, keywords: &["guwahati", "dispur"] },
    CityEntry { token: "nazira", label: "Nazira", tier: Tier::Town, keywords: &["nazira"] },
    CityEntry { token: "sivasagar", label: "Sivasagar", tier: Tier::Town, keywords: &["sivasagar"] },
    CityEntry {
        token: "lakhimpur",
        label: "Lakhimpur",
        tier: Tier::Town,
        keywords: &["north lakhimpur", "lakhimpur", "north laximpur", "laximpur"],
    },
    CityEntry { token: "jorhat", label: "Jorhat", tier: Tier::Town, keywords: &["jorhat"] },
    CityEntry { token: "morigaon", label: "Morigaon", tier: Tier::Town, keywords: &["morigaon"] },
    CityEntry { token: "dhemaji", label: "Dhemaji", tier: Tier::Town, keywords: &["dhemaji"] },
    CityEntry { token: "dibrugarh", label: "Dibrugarh", tier: Tier::Town, keywords: &["dibrugarh"] },
    CityEntry { token: "tezpur", label: "Tezpur", tier: Tier::Town, keywords: &["tezpur"] },
];

#[inline]
fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// First table entry mentioned anywhere in `text` (case-insensitive).
pub fn match_city(text: &str) -> Option<&'static CityEntry> {
    let lower = text.to_lowercase();
    CITY_TABLE.iter().find(|entry| contains_any(&lower, entry.keywords))
}

/// Resolve a record's city token.
///
/// A non-blank explicit `city` is authoritative. Otherwise the description
/// is matched against [`CITY_TABLE`]; no match (or no description) gives
/// [`OTHER`].
pub fn classify(location_desc: Option<&str>, explicit_city: Option<&str>) -> CityToken {
    if let Some(city) = explicit_city.filter(|c| !c.trim().is_empty()) {
        return CityToken::new(city);
    }

    location_desc
        .and_then(match_city)
        .map(|entry| CityToken::new(entry.token))
        .unwrap_or_else(CityToken::other)
}

/// Turn a user-typed city name into a token.
///
/// Names containing a table keyword resolve to that entry ("North Lakhimpur"
/// gives `lakhimpur`); anything else is used verbatim, lower-cased.
pub fn resolve_city_query(name: &str) -> CityToken {
    match match_city(name) {
        Some(entry) => CityToken::new(entry.token),
        None => CityToken::new(name),
    }
}

/// Marker colour bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerColor {
    /// Red
    MajorCity,
    /// Blue
    Town,
    /// Green
    Other,
}

impl MarkerColor {
    /// Hex colour from the map configuration
    pub fn hex<'a>(&self, map: &'a MapConfig) -> &'a str {
        match self {
            MarkerColor::MajorCity => &map.major_city_color,
            MarkerColor::Town => &map.town_color,
            MarkerColor::Other => &map.other_color,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerColor::MajorCity => "major_city",
            MarkerColor::Town => "town",
            MarkerColor::Other => "other",
        }
    }
}

impl From<Tier> for MarkerColor {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::MajorCity => MarkerColor::MajorCity,
            Tier::Town => MarkerColor::Town,
        }
    }
}

/// Marker colour from the location description alone.
pub fn marker_color(location_desc: Option<&str>) -> MarkerColor {
    location_desc
        .and_then(match_city)
        .map(|entry| MarkerColor::from(entry.tier))
        .unwrap_or(MarkerColor::Other)
}

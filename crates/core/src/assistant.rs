//! Rule-based mural assistant
//!
//! Questions are routed by keyword to a fixed set of intents. Each intent
//! runs a catalog query and returns a typed [`Reply`]; rendering the reply
//! is left to the front end.

use crate::catalog::Catalog;
use crate::classify::{match_city, CityToken, CITY_TABLE};
use crate::config::ConfigSchema;
use crate::filter::filter_by_city;
use crate::lookup::{find_by_name, find_mentioned, MuralDetail};
use crate::ranking::nearest_murals;
use crate::record::MuralRecord;
use crate::stats::{aggregate_stats, CatalogStats};
use muralmap_geo::{Coordinate, Ranked};
use serde::Serialize;

/// What the user is asking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Nearby,
    FunFact,
    /// A city question; `None` when only the region was named
    City(Option<CityToken>),
    Info,
    Overview,
    Help,
    General,
}

const NEARBY_KEYWORDS: &[&str] = &["near me", "closest", "nearby"];
const FUN_FACT_KEYWORDS: &[&str] = &["fact", "trivia"];
const REGION_KEYWORDS: &[&str] = &["assam"];
const INFO_KEYWORDS: &[&str] = &["tell", "about", "info"];
const OVERVIEW_KEYWORDS: &[&str] = &["list", "all", "show"];
const HELP_KEYWORDS: &[&str] = &["help", "how"];

fn mentions(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| query.contains(k))
}

impl Intent {
    /// Classify a question. Substring tests on the lower-cased query, first
    /// match wins in the order the variants are declared.
    pub fn detect(query: &str) -> Self {
        let query = query.to_lowercase();

        if mentions(&query, NEARBY_KEYWORDS) {
            Intent::Nearby
        } else if mentions(&query, FUN_FACT_KEYWORDS) {
            Intent::FunFact
        } else if let Some(entry) = match_city(&query) {
            Intent::City(Some(CityToken::new(entry.token)))
        } else if mentions(&query, REGION_KEYWORDS) {
            Intent::City(None)
        } else if mentions(&query, INFO_KEYWORDS) {
            Intent::Info
        } else if mentions(&query, OVERVIEW_KEYWORDS) {
            Intent::Overview
        } else if mentions(&query, HELP_KEYWORDS) {
            Intent::Help
        } else {
            Intent::General
        }
    }
}

/// Why the caller could not supply the user's position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    /// The host cannot provide a position at all
    Unavailable,
    /// The user refused access
    Denied,
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeolocationError::Unavailable => f.write_str("location is not available"),
            GeolocationError::Denied => f.write_str("location access was denied"),
        }
    }
}

/// Result of a position request, as handed over by the caller
pub type UserLocation = std::result::Result<Coordinate, GeolocationError>;

/// A randomly chosen mural and a few facts about it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunFact {
    pub index: usize,
    pub name: String,
    pub location: String,
    pub city: CityToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    pub image_count: usize,
}

/// Pick a mural deterministically from `seed`; `None` for an empty catalog.
pub fn fun_fact(records: &[MuralRecord], seed: u64) -> Option<FunFact> {
    if records.is_empty() {
        return None;
    }
    let index = (seed % records.len() as u64) as usize;
    let record = &records[index];
    Some(FunFact {
        index,
        name: record.name.trim().to_string(),
        location: record.location_label().to_string(),
        city: record.city_token(),
        artist: record.artist_credit().map(str::to_string),
        image_count: record.images.len(),
    })
}

/// Assistant answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply<'a> {
    /// Closest murals, and where to point the map
    Nearby {
        murals: Vec<Ranked<&'a MuralRecord>>,
        focus: Coordinate,
        zoom: u8,
    },
    /// A position was given but no mural has usable coordinates
    NoNearby,
    LocationUnavailable { reason: GeolocationError },
    CityMurals { city: CityToken, murals: Vec<&'a MuralRecord> },
    NoCityMurals { city: CityToken },
    /// Region mentioned without a known city
    AskForCity { suggestions: Vec<&'static str> },
    MuralInfo { detail: MuralDetail },
    AskForMural,
    Overview { stats: CatalogStats },
    FunFact { fact: FunFact },
    Help,
    General,
}

/// Answers questions against one catalog
#[derive(Debug, Clone)]
pub struct Assistant<'a> {
    catalog: &'a Catalog,
    config: &'a ConfigSchema,
    seed: u64,
}

impl<'a> Assistant<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a ConfigSchema) -> Self {
        Self { catalog, config, seed: 0 }
    }

    /// Seed for fun-fact selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Answer `query`. `location` is only consulted for nearby questions.
    pub fn respond(&self, query: &str, location: UserLocation) -> Reply<'a> {
        let intent = match Intent::detect(query) {
            // A mural named after its city still gets its detail view
            Intent::City(_)
                if mentions(&query.to_lowercase(), INFO_KEYWORDS)
                    && find_mentioned(self.catalog.records(), query).is_some() =>
            {
                Intent::Info
            }
            intent => intent,
        };
        tracing::debug!(?intent, "Assistant intent");

        match intent {
            Intent::Nearby => self.nearby(location),
            Intent::FunFact => match fun_fact(self.catalog.records(), self.seed) {
                Some(fact) => Reply::FunFact { fact },
                None => Reply::General,
            },
            Intent::City(Some(city)) => {
                let murals = filter_by_city(self.catalog.records(), city.as_str());
                if murals.is_empty() {
                    Reply::NoCityMurals { city }
                } else {
                    Reply::CityMurals { city, murals }
                }
            }
            Intent::City(None) => Reply::AskForCity {
                suggestions: CITY_TABLE.iter().map(|entry| entry.label).collect(),
            },
            Intent::Info => match find_by_name(self.catalog.records(), query) {
                Some((index, record)) => Reply::MuralInfo {
                    detail: MuralDetail::new(index, record, &self.config.general.image_dir),
                },
                None => Reply::AskForMural,
            },
            Intent::Overview => Reply::Overview {
                stats: aggregate_stats(self.catalog.records()),
            },
            Intent::Help => Reply::Help,
            Intent::General => Reply::General,
        }
    }

    fn nearby(&self, location: UserLocation) -> Reply<'a> {
        let user = match location {
            Ok(user) => user,
            Err(reason) => return Reply::LocationUnavailable { reason },
        };

        let murals = nearest_murals(
            self.catalog.records(),
            user.latitude,
            user.longitude,
            self.config.assistant.nearest_limit,
        );

        let Some(focus) = murals.first().map(|closest| closest.coordinate) else {
            return Reply::NoNearby;
        };

        Reply::Nearby {
            murals,
            focus,
            zoom: self.config.assistant.nearby_zoom,
        }
    }
}

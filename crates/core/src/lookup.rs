//! Mural lookup by name and detail views

use crate::classify::CityToken;
use crate::images::image_path;
use crate::record::MuralRecord;
use muralmap_geo::{format_dms, Axis, Coordinate};
use muralmap_search::{calculate_relevance, RelevanceScore};
use serde::Serialize;

/// Find the mural a free-text query refers to.
///
/// First record whose lower-cased name is contained in the query, or that
/// contains the query. Failing that, the record whose name best matches the
/// individual query words (word-boundary relevance or better, summed over
/// words; ties keep catalog order). Blank queries match nothing.
pub fn find_by_name<'a>(records: &'a [MuralRecord], query: &str) -> Option<(usize, &'a MuralRecord)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(direct) = find_mentioned(records, &needle) {
        return Some(direct);
    }

    let words: Vec<&str> = needle
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .collect();

    let (index, score) = records
        .iter()
        .enumerate()
        .map(|(index, record)| (index, word_relevance(&record.name, &words)))
        .fold(None, |best: Option<(usize, u32)>, (index, score)| match best {
            Some((_, top)) if top >= score => best,
            _ if score > 0 => Some((index, score)),
            _ => best,
        })?;

    tracing::debug!(query, index, score, "Name lookup fell back to word relevance");
    Some((index, &records[index]))
}

/// First record whose lower-cased name appears in the query, or that
/// contains the whole query. No fuzzy fallback.
pub fn find_mentioned<'a>(records: &'a [MuralRecord], query: &str) -> Option<(usize, &'a MuralRecord)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    records.iter().enumerate().find(|(_, record)| {
        let name = record.name.trim().to_lowercase();
        !name.is_empty() && (needle.contains(&name) || name.contains(&needle))
    })
}

const MIN_WORD_CHARS: usize = 3;

fn word_relevance(name: &str, words: &[&str]) -> u32 {
    words
        .iter()
        .map(|word| calculate_relevance(name, word))
        .filter(|&score| score >= RelevanceScore::WordBoundary as u32)
        .sum()
}

/// Everything a detail or fullscreen view shows for one mural.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuralDetail {
    pub index: usize,
    pub name: String,
    pub location: String,
    pub city: CityToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    /// Position re-rendered as DMS, `None` without coordinates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dms: Option<String>,
    /// Cleaned image paths in display order
    pub images: Vec<String>,
}

impl MuralDetail {
    pub fn new(index: usize, record: &MuralRecord, image_dir: &str) -> Self {
        let coordinate = record.coordinate();
        let dms = coordinate.and_then(|c| {
            Some(format!(
                "{} {}",
                format_dms(c.latitude, Axis::Latitude)?,
                format_dms(c.longitude, Axis::Longitude)?
            ))
        });

        Self {
            index,
            name: record.name.trim().to_string(),
            location: record.location_label().to_string(),
            city: record.city_token(),
            description: record.description.clone(),
            artist: record.artist_credit().map(str::to_string),
            status: record.status.clone(),
            coordinate,
            dms,
            images: record.images.iter().map(|file| image_path(image_dir, file)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_query_contains_name() {
        let catalog = Catalog::builtin().unwrap();
        let (index, record) = find_by_name(catalog.records(), "Tell me about The Discography Wall please").unwrap();
        assert_eq!(index, 19);
        assert_eq!(record.name, "The Discography Wall");
    }

    #[test]
    fn test_name_contains_query() {
        let catalog = Catalog::builtin().unwrap();
        let (_, record) = find_by_name(catalog.records(), "mayabini").unwrap();
        assert_eq!(record.name, "Mayabini Mural");
    }

    #[test]
    fn test_first_match_wins() {
        let catalog = Catalog::builtin().unwrap();
        let (index, _) = find_by_name(catalog.records(), "colonel zubeen da").unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_relevance_fallback() {
        let records = vec![MuralRecord::new("The Smiling Rebel"), MuralRecord::new("Axom's Charisma")];
        // Neither name rule holds, but "charis" starts a word in the second name
        let (index, record) = find_by_name(&records, "tell me about charis, the axom one").unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.name, "Axom's Charisma");
    }

    #[test]
    fn test_find_mentioned_skips_fuzzy_fallback() {
        let records = vec![MuralRecord::new("The Smiling Rebel"), MuralRecord::new("Axom's Charisma")];
        assert!(find_mentioned(&records, "tell me about charis").is_none());
        assert_eq!(find_mentioned(&records, "about the smiling rebel").map(|(i, _)| i), Some(0));
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(find_by_name(catalog.records(), "banana split").is_none());
        assert!(find_by_name(catalog.records(), "   ").is_none());
    }

    #[test]
    fn test_detail() {
        let record = MuralRecord::new("Poetry of the Soul Mural ")
            .with_position("26°15'3.50\"N", "92°20'27.07\"E")
            .with_location("Bihutoli Morigaon")
            .with_images(["Morigaon mural(1).jpg", "Morigaon  mural .jpg"]);

        let detail = MuralDetail::new(26, &record, "Images");
        assert_eq!(detail.name, "Poetry of the Soul Mural");
        assert_eq!(detail.city, "morigaon");
        assert_eq!(detail.images, vec!["Images/Morigaon mural(1).jpg", "Images/Morigaon mural.jpg"]);
        assert_eq!(detail.dms.as_deref(), Some("26°15'3.5000\"N 92°20'27.0700\"E"));
        assert!(detail.artist.is_none());
    }

    #[test]
    fn test_detail_without_position() {
        let detail = MuralDetail::new(0, &MuralRecord::new("x"), "Images");
        assert!(detail.coordinate.is_none());
        assert!(detail.dms.is_none());
        assert_eq!(detail.location, "Unknown location");
    }
}

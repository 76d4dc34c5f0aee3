//! List command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_count, format_position, Status};
use muralmap_core::MuralRecord;
use muralmap_search::{search, RelevanceScore};
use serde::Serialize;

#[derive(Serialize)]
struct ListEntry<'a> {
    index: usize,
    name: &'a str,
    location: &'a str,
    city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longitude: Option<f64>,
}

impl<'a> ListEntry<'a> {
    fn new(index: usize, record: &'a MuralRecord) -> Self {
        let position = record.coordinate();
        Self {
            index,
            name: record.name.trim(),
            location: record.location_label(),
            city: record.city_token().to_string(),
            latitude: position.map(|p| p.latitude),
            longitude: position.map(|p| p.longitude),
        }
    }
}

/// Every mural, including those without usable coordinates
pub fn run(ctx: &Context, query: Option<&str>) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.list");

    let indexed: Vec<(usize, &MuralRecord)> = ctx.catalog.iter().enumerate().collect();
    let selected: Vec<(usize, &MuralRecord)> = match query {
        Some(query) => search(&indexed, query, RelevanceScore::Contains, |entry| entry.1.name.as_str())?
            .into_iter()
            .map(|hit| *hit.item)
            .collect(),
        None => indexed,
    };

    let entries: Vec<ListEntry> = selected.iter().map(|(index, record)| ListEntry::new(*index, record)).collect();

    if ctx.json {
        print_json(&entries)?;
        return Ok(SUCCESS);
    }

    Status::header(&ctx.config.schema.general.site_name);
    if entries.is_empty() {
        Status::info("No murals match that search");
        return Ok(SUCCESS);
    }

    for entry in &entries {
        Status::item(entry.index + 1, entry.name);
        Status::detail("Location", entry.location);
        match (entry.latitude, entry.longitude) {
            (Some(lat), Some(lng)) => Status::detail("Position", &format_position(lat, lng)),
            _ => Status::detail("Position", "no usable coordinates"),
        }
    }

    println!();
    Status::success(&format_count(entries.len(), "mural", "murals"));
    Ok(SUCCESS)
}

//! City command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_count, Status};
use muralmap_core::classify::{resolve_city_query, CITY_TABLE};
use muralmap_core::filter::filter_by_city;
use muralmap_search::levenshtein_distance;

/// Largest edit distance still offered as a "did you mean"
const MAX_SUGGESTION_DISTANCE: usize = 2;

pub fn run(ctx: &Context, name: &str) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.city");

    let city = resolve_city_query(name);
    let murals = filter_by_city(ctx.catalog.records(), city.as_str());

    if ctx.json {
        print_json(&serde_json::json!({
            "city": city,
            "murals": murals,
        }))?;
        return Ok(SUCCESS);
    }

    if murals.is_empty() {
        Status::info(&format!("No murals found in {}", city.label()));
        if let Some(suggestion) = suggest_city(city.as_str()) {
            Status::info(&format!("Did you mean {}?", suggestion));
        }
        return Ok(SUCCESS);
    }

    Status::header(&format!("Murals in {}", city.label()));
    for (position, record) in murals.iter().enumerate() {
        Status::item(position + 1, record.name.trim());
        Status::detail("Location", record.location_label());
        Status::detail("Artist", record.artist_credit().unwrap_or("Unknown"));
    }

    println!();
    Status::success(&format_count(murals.len(), "mural", "murals"));
    Ok(SUCCESS)
}

/// Closest known city label to a mistyped token
fn suggest_city(token: &str) -> Option<&'static str> {
    CITY_TABLE
        .iter()
        .map(|entry| (levenshtein_distance(token, entry.token), entry))
        .filter(|(distance, _)| (1..=MAX_SUGGESTION_DISTANCE).contains(distance))
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, entry)| entry.label)
}

//! Nearest command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_distance_km, Status};
use muralmap_core::ranking::nearest_murals;
use muralmap_core::{Error, ErrorCode};
use muralmap_geo::Coordinate;
use muralmap_telemetry::metrics;

pub fn run(ctx: &Context, lat: f64, lng: f64, k: Option<usize>) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.nearest");

    if !Coordinate::new(lat, lng).is_valid() {
        return Err(Error::new(
            ErrorCode::InvalidInput,
            format!("Position {}, {} is outside the valid range", lat, lng),
        )
        .with_suggestion("Latitude must be within -90..90 and longitude within -180..180")
        .into());
    }

    let k = k.unwrap_or(ctx.config.schema.assistant.nearest_limit);
    let ranked = nearest_murals(ctx.catalog.records(), lat, lng, k);
    metrics().increment_by("murals.ranked", ranked.len() as u64);

    if ctx.json {
        print_json(&ranked)?;
        return Ok(SUCCESS);
    }

    if ranked.is_empty() {
        Status::info("No murals found near that position");
        return Ok(SUCCESS);
    }

    Status::header(&format!("{} nearest murals", ranked.len()));
    for (position, entry) in ranked.iter().enumerate() {
        Status::item(position + 1, entry.item.name.trim());
        Status::detail("Location", entry.item.location_label());
        Status::detail("Distance", &format_distance_km(entry.distance_km));
    }

    Ok(SUCCESS)
}

//! Markers command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_position, swatch, Status};
use muralmap_core::markers::{map_markers, MapMarker};
use serde::Serialize;

#[derive(Serialize)]
struct MarkerOutput<'a> {
    #[serde(flatten)]
    marker: &'a MapMarker,
    hex: &'a str,
}

pub fn run(ctx: &Context) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.markers");

    let map = &ctx.config.schema.map;
    let markers = map_markers(ctx.catalog.records());
    let skipped = ctx.catalog.len() - markers.len();

    if ctx.json {
        let output: Vec<MarkerOutput> = markers
            .iter()
            .map(|marker| MarkerOutput { marker, hex: marker.color.hex(map) })
            .collect();
        print_json(&output)?;
        return Ok(SUCCESS);
    }

    Status::header(&format!("{} map markers", markers.len()));
    for marker in &markers {
        println!(
            "  {} {:<10} {}  {}",
            swatch(marker.color.hex(map)),
            marker.color.as_str(),
            format_position(marker.latitude, marker.longitude),
            marker.name.trim()
        );
    }

    if skipped > 0 {
        Status::warning(&format!("{} without usable coordinates skipped", skipped));
    }

    Ok(SUCCESS)
}

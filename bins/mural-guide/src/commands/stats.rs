//! Stats command

use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_count, Status};
use muralmap_core::stats::{aggregate_stats, city_breakdown};
use owo_colors::OwoColorize;

pub fn run(ctx: &Context, by_city: bool) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.stats");

    let records = ctx.catalog.records();
    let stats = aggregate_stats(records);
    let breakdown = by_city.then(|| city_breakdown(records));

    if ctx.json {
        print_json(&serde_json::json!({
            "stats": stats,
            "cities": breakdown,
        }))?;
        return Ok(SUCCESS);
    }

    Status::header(&format!("{} overview", ctx.config.schema.general.site_name));
    println!("  {:<22} {}", "Total murals:", stats.total_murals.bold());
    println!("  {:<22} {}", "Cities & towns:", stats.cities.bold());
    println!("  {:<22} {}", "Contributing artists:", stats.artists.bold());
    println!("  {:<22} {}", "Total images:", stats.images.bold());

    if let Some(breakdown) = breakdown {
        Status::subheader("By city");
        for entry in &breakdown {
            println!("  {:<22} {}", entry.city.label(), format_count(entry.murals, "mural", "murals"));
        }
    }

    Ok(SUCCESS)
}

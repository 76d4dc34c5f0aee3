//! Ask command: the assistant on the command line

use super::show::print_detail;
use super::{print_json, Context, SUCCESS};
use muralmap_cli::output::{format_distance_km, Status};
use muralmap_core::assistant::{Assistant, GeolocationError, Reply};
use muralmap_geo::Coordinate;

pub fn run(ctx: &Context, query: &str, position: Option<(f64, f64)>, seed: Option<u64>) -> anyhow::Result<u8> {
    muralmap_telemetry::timed_span!("command.ask");

    let seed = seed.unwrap_or_else(time_seed);
    let location = position
        .map(|(lat, lng)| Coordinate::new(lat, lng))
        .ok_or(GeolocationError::Unavailable);

    let assistant = Assistant::new(&ctx.catalog, &ctx.config.schema).with_seed(seed);
    let reply = assistant.respond(query, location);

    if ctx.json {
        print_json(&reply)?;
    } else {
        render(&reply);
    }
    Ok(SUCCESS)
}

fn time_seed() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

fn render(reply: &Reply<'_>) {
    match reply {
        Reply::Nearby { murals, .. } => {
            Status::header(&format!("{} nearest murals to you", murals.len()));
            for (position, entry) in murals.iter().enumerate() {
                Status::item(position + 1, entry.item.name.trim());
                Status::detail("Location", entry.item.location_label());
                Status::detail("Distance", &format!("{} away", format_distance_km(entry.distance_km)));
            }
        }
        Reply::NoNearby => Status::info("No murals found in your area."),
        Reply::LocationUnavailable { reason } => {
            Status::warning(&format!("Cannot look for nearby murals: {}.", reason));
            match reason {
                GeolocationError::Unavailable => {
                    Status::info("Pass --lat and --lng, or ask for murals in a specific city.")
                }
                GeolocationError::Denied => Status::info("Allow location access, or tell me a city name instead."),
            }
        }
        Reply::CityMurals { city, murals } => {
            Status::header(&format!("Murals in {}", city.label()));
            for (position, record) in murals.iter().enumerate() {
                Status::item(position + 1, record.name.trim());
                Status::detail("Location", record.location_label());
                Status::detail("Artist", record.artist_credit().unwrap_or("Unknown"));
            }
        }
        Reply::NoCityMurals { city } => Status::info(&format!("No murals found in {}.", city.label())),
        Reply::AskForCity { suggestions } => {
            Status::info(&format!("Which city are you interested in? Try: {}", suggestions.join(", ")))
        }
        Reply::MuralInfo { detail } => print_detail(detail),
        Reply::AskForMural => Status::info("Which mural would you like to know about? Try mentioning its name!"),
        Reply::Overview { stats } => {
            Status::header("Murals overview");
            Status::detail("Total murals", &stats.total_murals.to_string());
            Status::detail("Cities & towns", &stats.cities.to_string());
            Status::detail("Contributing artists", &stats.artists.to_string());
            Status::detail("Total images", &stats.images.to_string());
        }
        Reply::FunFact { fact } => {
            Status::header("Fun fact");
            let artist = fact.artist.as_deref().unwrap_or("an uncredited artist");
            println!(
                "  \"{}\" at {} was painted by {} and has {} on the map.",
                fact.name,
                fact.location,
                artist,
                muralmap_cli::output::format_count(fact.image_count, "photo", "photos")
            );
        }
        Reply::Help => {
            Status::header("How to use the mural guide");
            Status::detail("\"Find murals near me\"", "nearby murals (with --lat and --lng)");
            Status::detail("\"Show murals in <city>\"", "murals in a specific city");
            Status::detail("\"Tell me about <mural name>\"", "details about a specific mural");
            Status::detail("\"List all murals\"", "statistics");
            Status::detail("\"Fun fact\"", "a random mural");
        }
        Reply::General => Status::info(
            "I can find nearby murals, show murals in a city, or tell you about a specific mural.",
        ),
    }
}

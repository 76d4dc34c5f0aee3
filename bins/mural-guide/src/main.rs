//! mural-guide: command-line guide to the memorial murals
//!
//! Lists, ranks, filters and validates the mural catalog, and answers the
//! same questions as the site's assistant.

use clap::{Parser, Subcommand};
use muralmap_core::error::exit_codes;
use muralmap_core::{Catalog, ErrorCode};
use muralmap_core::config::Config;
use muralmap_telemetry::{metrics, Event, TelemetryConfig};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

mod commands;

use commands::{ask, city, list, markers, nearest, show, stats, validate, Context};

/// Find, rank and explore the Zubeen Garg memorial murals
#[derive(Parser)]
#[command(name = "mural-guide")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .muralmap.toml when present)
    #[arg(short, long, global = true, env = "MURALMAP_CONFIG")]
    config: Option<PathBuf>,

    /// JSON catalog to use instead of the configured or bundled one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Dump collected metrics to stderr when done
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every mural in catalog order
    List {
        /// Only murals whose name matches this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show catalog statistics
    Stats {
        /// Also count murals per city
        #[arg(long)]
        by_city: bool,
    },

    /// Murals closest to a position
    Nearest {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,

        /// How many murals to show (defaults to assistant.nearest_limit)
        #[arg(short)]
        k: Option<usize>,
    },

    /// Murals in a city
    City {
        /// City name, e.g. "Guwahati" or "North Lakhimpur"
        name: String,
    },

    /// Map markers with colour and decimal position
    Markers,

    /// Details and image paths for one mural
    Show {
        /// Mural name or part of it
        name: String,
    },

    /// Ask the assistant a question
    Ask {
        /// The question, e.g. "murals near me"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Your latitude, for nearby questions
        #[arg(long, allow_negative_numbers = true, requires = "lng")]
        lat: Option<f64>,

        /// Your longitude, for nearby questions
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lng: Option<f64>,

        /// Fun-fact seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check the catalog for unusable records
    Validate,
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Stats { .. } => "stats",
            Commands::Nearest { .. } => "nearest",
            Commands::City { .. } => "city",
            Commands::Markers => "markers",
            Commands::Show { .. } => "show",
            Commands::Ask { .. } => "ask",
            Commands::Validate => "validate",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    let result = run(&cli);
    let code = match result {
        Ok(code) => code,
        Err(e) => {
            report_error(&e, cli.json);
            exit_code_for(&e)
        }
    };

    if cli.metrics {
        metrics().gauge("process.exit_code", code as u64);
        eprintln!("{}", serde_json::to_string_pretty(&metrics().export_json()).unwrap_or_default());
    }

    if cli.verbose && !cli.json {
        eprintln!(
            "{}",
            format!("Finished in {}", muralmap_cli::output::format_duration(started.elapsed())).dimmed()
        );
    }

    ExitCode::from(code)
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let config = Config::load(cli.config.as_deref())?;

    let mut telemetry = TelemetryConfig::with_level(config.schema.logging.level.clone());
    telemetry.show_target = config.schema.logging.show_target;
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    if let Err(e) = muralmap_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow(), e);
    }

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Using configuration file");
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::load(&config)?,
    };
    metrics().gauge("catalog.murals", catalog.len() as u64);

    Event::new("command", serde_json::json!({ "name": cli.command.name() })).log();
    metrics().increment("commands");

    let ctx = Context::new(config, catalog, cli.json);

    match &cli.command {
        Commands::List { search } => list::run(&ctx, search.as_deref()),
        Commands::Stats { by_city } => stats::run(&ctx, *by_city),
        Commands::Nearest { lat, lng, k } => nearest::run(&ctx, *lat, *lng, *k),
        Commands::City { name } => city::run(&ctx, name),
        Commands::Markers => markers::run(&ctx),
        Commands::Show { name } => show::run(&ctx, name),
        Commands::Ask { query, lat, lng, seed } => ask::run(&ctx, &query.join(" "), lat.zip(*lng), *seed),
        Commands::Validate => validate::run(&ctx),
    }
}

fn report_error(err: &anyhow::Error, json: bool) {
    match err.downcast_ref::<muralmap_core::Error>() {
        Some(core) if json => {
            println!("{}", serde_json::to_string_pretty(&core.to_report()).unwrap_or_default());
        }
        _ => eprintln!("{} {}", "Error:".red().bold(), err),
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<muralmap_core::Error>().map(|e| e.code) {
        Some(
            ErrorCode::ConfigError
            | ErrorCode::ConfigNotFound
            | ErrorCode::ConfigParseError
            | ErrorCode::ConfigValidationError,
        ) => exit_codes::CONFIG_ERROR,
        Some(
            ErrorCode::CatalogError
            | ErrorCode::CatalogParseError
            | ErrorCode::MuralNotFound
            | ErrorCode::IoError
            | ErrorCode::FileNotFound
            | ErrorCode::PermissionDenied,
        ) => exit_codes::CATALOG_ERROR,
        Some(ErrorCode::ValidationError | ErrorCode::InvalidInput) => exit_codes::VALIDATION_ERROR,
        Some(ErrorCode::Unknown | ErrorCode::Internal) | None => exit_codes::FAILURE,
    };
    u8::try_from(code).unwrap_or(1)
}

//! CLI command implementations

use muralmap_core::config::Config;
use muralmap_core::error::exit_codes;
use muralmap_core::Catalog;
use serde::Serialize;

pub mod ask;
pub mod city;
pub mod list;
pub mod markers;
pub mod nearest;
pub mod show;
pub mod stats;
pub mod validate;

/// Everything a command needs, loaded once in `main`
pub struct Context {
    pub config: Config,
    pub catalog: Catalog,
    pub json: bool,
}

impl Context {
    pub fn new(config: Config, catalog: Catalog, json: bool) -> Self {
        Self { config, catalog, json }
    }

    /// Image directory from `[general]`
    pub fn image_dir(&self) -> &str {
        &self.config.schema.general.image_dir
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Exit code for a successful command
pub const SUCCESS: u8 = exit_codes::SUCCESS as u8;

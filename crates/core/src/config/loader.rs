//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, or the first standard
    /// location that exists, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error; a missing file in
    /// the standard locations is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => {
                tracing::debug!(path = %p.display(), "Loading configuration");
                load_config_file(p)?
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                ConfigSchema::default()
            }
        };

        let validation = schema.validate();
        for warning in validation.warnings() {
            tracing::warn!(field = %warning.field, "{}", warning.message);
        }
        validation
            .to_result()
            .map_err(|e| Error::new(ErrorCode::ConfigValidationError, e.message))
            .context(format!("While validating {}", display_path(config_path.as_deref())))?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }

    /// The catalog path from `[general]`, with `~` and `$VARS` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.schema
            .general
            .catalog_path
            .as_deref()
            .map(|raw| match shellexpand::full(raw) {
                Ok(expanded) => PathBuf::from(expanded.into_owned()),
                Err(_) => PathBuf::from(raw),
            })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = [".muralmap.toml", "muralmap.toml", ".config/muralmap.toml"]
        .into_iter()
        .map(PathBuf::from);
    let user = dirs::config_dir().map(|dir| dir.join("muralmap").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

fn display_path(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "default configuration".to_string())
}

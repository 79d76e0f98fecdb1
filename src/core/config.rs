//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.charstats/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::OutputFormat;
use crate::core::stats::Profile;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StatsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub character: CharacterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub refresh_interval_ms: Option<u64>,
    pub output: Option<OutputFormat>,
    pub show_panel: Option<bool>,
}

/// Starting profile overrides. Anything left out keeps the built-in default.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CharacterConfig {
    pub age: Option<u32>,
    pub weight: Option<u32>,
    pub height_inches: Option<u32>,
    pub max_calories: Option<f64>,
    pub start_date: Option<NaiveDate>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

/// Ticks faster than this would only spin the shell.
const MIN_REFRESH_INTERVAL_MS: u64 = 50;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub refresh_interval: Duration,
    pub output: OutputFormat,
    pub show_panel: bool,
    pub profile: Profile,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub refresh_interval_ms: Option<u64>,
    pub output: Option<OutputFormat>,
    pub hide_panel: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.charstats/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".charstats").join("config.toml"))
}

/// Load config from `path`, or from `~/.charstats/config.toml` when `path` is `None`.
///
/// A missing default config is generated (commented out) and treated as
/// empty. A missing explicit path is an I/O error. A malformed file
/// returns `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<StatsConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    info!("No config file found, generating default at {}", p.display());
                    generate_default_config(&p);
                    return Ok(StatsConfig::default());
                }
                p
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(StatsConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StatsConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# charstats configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# refresh_interval_ms = 1000         # Or set CHARSTATS_REFRESH_MS
# output = "text"                    # "text" or "json", or set CHARSTATS_OUTPUT
# show_panel = true

# [character]
# age = 19
# weight = 170                       # lbs
# height_inches = 67
# max_calories = 1620.0              # budget until the first day ends
# start_date = "2009-06-15"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StatsConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Refresh interval: CLI → env → config → default
    let refresh_ms = cli
        .refresh_interval_ms
        .or_else(|| env_parse("CHARSTATS_REFRESH_MS"))
        .or(config.general.refresh_interval_ms)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL_MS);
    let refresh_ms = if refresh_ms < MIN_REFRESH_INTERVAL_MS {
        warn!(
            "Refresh interval {}ms is too short, using {}ms",
            refresh_ms, MIN_REFRESH_INTERVAL_MS
        );
        MIN_REFRESH_INTERVAL_MS
    } else {
        refresh_ms
    };

    // Output: CLI → env → config → default
    let output = cli
        .output
        .or_else(|| env_output("CHARSTATS_OUTPUT"))
        .or(config.general.output)
        .unwrap_or_default();

    let show_panel = !cli.hide_panel && config.general.show_panel.unwrap_or(true);

    ResolvedConfig {
        refresh_interval: Duration::from_millis(refresh_ms),
        output,
        show_panel,
        profile: resolve_profile(&config.character),
    }
}

fn resolve_profile(character: &CharacterConfig) -> Profile {
    let defaults = Profile::default();
    let height_inches = match character.height_inches {
        Some(0) => {
            warn!("height_inches must be positive, using {}", defaults.height_inches);
            defaults.height_inches
        }
        Some(h) => h,
        None => defaults.height_inches,
    };

    let max_calories = match character.max_calories {
        Some(m) if !(m.is_finite() && m > 0.0) => {
            warn!("max_calories must be a positive number, using {}", defaults.max_calories);
            defaults.max_calories
        }
        Some(m) => m,
        None => defaults.max_calories,
    };

    Profile {
        age: character.age.unwrap_or(defaults.age),
        weight: character.weight.unwrap_or(defaults.weight),
        height_inches,
        max_calories,
        start_date: character.start_date.unwrap_or(defaults.start_date),
    }
}

fn env_parse(key: &str) -> Option<u64> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

fn env_output(key: &str) -> Option<OutputFormat> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "text" => Some(OutputFormat::Text),
        "json" => Some(OutputFormat::Json),
        other => {
            warn!("Ignoring {}={:?}: expected \"text\" or \"json\"", key, other);
            None
        }
    }
}

//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.moodmirror/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::history::{HistoryEntry, default_history};
use crate::core::state::DEFAULT_ANALYSIS_DELAY;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MoodMirrorConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Replaces the built-in history when present.
    pub history: Option<Vec<HistoryEntry>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub analysis_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub analysis_delay: Duration,
    pub log_level: LevelFilter,
    pub history: Vec<HistoryEntry>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub delay_ms: Option<u64>,
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

/// Returns the path to `~/.moodmirror/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".moodmirror").join("config.toml"))
}

/// Load config from `~/.moodmirror/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MoodMirrorConfig::default()`.
pub fn load_config() -> Result<MoodMirrorConfig, ConfigError> {
    match config_path() {
        Some(path) => {
            if !path.exists() {
                info!("No config file found, generating default at {}", path.display());
                generate_default_config(&path);
                return Ok(MoodMirrorConfig::default());
            }
            load_config_from(&path)
        }
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(MoodMirrorConfig::default())
        }
    }
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<MoodMirrorConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<MoodMirrorConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Mood Mirror Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# analysis_delay_ms = 1500           # Or MOODMIRROR_DELAY_MS / --delay-ms
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [[history]]
# date = "2026-01-16"
# emotion = "Calm"
# intensity = "moderate"             # "low", "moderate", "high"
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
pub fn resolve(config: &MoodMirrorConfig, cli: &CliOverrides) -> ResolvedConfig {
    let env_delay = std::env::var("MOODMIRROR_DELAY_MS").ok();
    let env_log = std::env::var("MOODMIRROR_LOG").ok();
    resolve_with_env(config, cli, env_delay.as_deref(), env_log.as_deref())
}

/// `resolve` with the environment passed in, so tests don't touch process env.
fn resolve_with_env(
    config: &MoodMirrorConfig,
    cli: &CliOverrides,
    env_delay: Option<&str>,
    env_log: Option<&str>,
) -> ResolvedConfig {
    // Delay: CLI → env → config → default
    let env_delay_ms = env_delay.and_then(|raw| match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("Ignoring MOODMIRROR_DELAY_MS={:?}: {}", raw, e);
            None
        }
    });
    let analysis_delay = cli
        .delay_ms
        .or(env_delay_ms)
        .or(config.general.analysis_delay_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_ANALYSIS_DELAY);

    // Log level: env → config → Info
    let log_level = env_log
        .and_then(parse_level)
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(LevelFilter::Info);

    let history = config.history.clone().unwrap_or_else(default_history);

    ResolvedConfig {
        analysis_delay,
        log_level,
        history,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::Intensity;

    #[test]
    fn test_default_config_parses() {
        let config = MoodMirrorConfig::default();
        assert!(config.history.is_none());
        assert!(config.general.analysis_delay_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = MoodMirrorConfig::default();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None, None);
        assert_eq!(resolved.analysis_delay, DEFAULT_ANALYSIS_DELAY);
        assert_eq!(resolved.log_level, LevelFilter::Info);
        assert_eq!(resolved.history, default_history());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MoodMirrorConfig {
            general: GeneralConfig {
                analysis_delay_ms: Some(250),
                log_level: Some("debug".to_string()),
            },
            history: Some(Vec::new()),
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None, None);
        assert_eq!(resolved.analysis_delay, Duration::from_millis(250));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(resolved.history.is_empty());
    }

    #[test]
    fn test_resolve_env_beats_config() {
        let config = MoodMirrorConfig {
            general: GeneralConfig {
                analysis_delay_ms: Some(250),
                log_level: Some("debug".to_string()),
            },
            history: None,
        };
        let resolved =
            resolve_with_env(&config, &CliOverrides::default(), Some("900"), Some("warn"));
        assert_eq!(resolved.analysis_delay, Duration::from_millis(900));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_resolve_cli_delay_wins() {
        let config = MoodMirrorConfig {
            general: GeneralConfig {
                analysis_delay_ms: Some(250),
                ..Default::default()
            },
            history: None,
        };
        let cli = CliOverrides { delay_ms: Some(0) };
        let resolved = resolve_with_env(&config, &cli, Some("900"), None);
        assert_eq!(resolved.analysis_delay, Duration::ZERO);
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = MoodMirrorConfig {
            general: GeneralConfig {
                analysis_delay_ms: Some(300),
                log_level: Some("trace".to_string()),
            },
            history: None,
        };
        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            Some("soon"),
            Some("loud"),
        );
        assert_eq!(resolved.analysis_delay, Duration::from_millis(300));
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_toml_with_history() {
        let toml_str = r#"
[general]
analysis_delay_ms = 1000
log_level = "warn"

[[history]]
date = "2026-03-02"
emotion = "Calm"
intensity = "low"

[[history]]
date = "2026-03-01"
emotion = "Stressed"
intensity = "high"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.analysis_delay_ms, Some(1000));
        let history = config.history.as_ref().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].emotion, "Calm");
        assert_eq!(history[1].intensity, Intensity::High);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
analysis_delay_ms = 10
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.general.analysis_delay_ms, Some(10));
        assert!(config.general.log_level.is_none());
        assert!(config.history.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nanalysis_delay_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_load_missing_explicit_path_is_io_error() {
        let path = std::env::temp_dir().join("moodmirror-does-not-exist/config.toml");
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

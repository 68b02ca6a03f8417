//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wotd/config.toml`. Every field is optional; a missing
//! file simply means "all defaults". Nothing is written to disk.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WotdConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub retry: RetryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub words_file: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub corner: Option<Corner>,
    pub offset_x: Option<u16>,
    pub offset_y: Option<u16>,
    pub max_width: Option<u16>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SpeechConfig {
    pub enabled: Option<bool>,
    pub command: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RetryConfig {
    pub startup_attempts: Option<u32>,
    pub delay_secs: Option<u64>,
    pub refresh_attempts: Option<u32>,
}

/// Screen corner the panel is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WORDS_FILE: &str = "Words_alphabetized.txt";
pub const DEFAULT_OFFSET_X: u16 = 2;
pub const DEFAULT_OFFSET_Y: u16 = 1;
pub const DEFAULT_MAX_WIDTH: u16 = 60;
pub const DEFAULT_SPEECH_COMMAND: &str = "say";
pub const DEFAULT_STARTUP_ATTEMPTS: u32 = 10;
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 5;
pub const DEFAULT_REFRESH_ATTEMPTS: u32 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub words_file: PathBuf,
    pub log_file: Option<PathBuf>,
    pub display: DisplaySettings,
    pub speech_enabled: bool,
    pub speech_command: String,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub corner: Corner,
    pub offset_x: u16,
    pub offset_y: u16,
    pub max_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            corner: Corner::default(),
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// Bounded fixed-delay retry, shared by startup and display-time refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total load-and-pick tries before startup gives up (at least 1).
    pub startup_attempts: u32,
    /// Consecutive refresh failures tolerated before showing the error panel.
    pub refresh_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            startup_attempts: DEFAULT_STARTUP_ATTEMPTS,
            refresh_attempts: DEFAULT_REFRESH_ATTEMPTS,
            delay: Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
        }
    }
}

/// Values that only come from the command line.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub words_file: Option<PathBuf>,
    pub no_speech: bool,
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

/// Returns `~/.wotd/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wotd"))
}

/// Returns the path to `~/.wotd/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.wotd/config.toml`.
///
/// A missing file (or missing home directory) yields `WotdConfig::default()`.
/// A file that exists but is malformed yields `ConfigError::Parse`.
pub fn load_config() -> Result<WotdConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WotdConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<WotdConfig, ConfigError> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(WotdConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WotdConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WotdConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &WotdConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Words file: CLI → env → config (relative to ~/.wotd/) → next to the executable
    let words_file = cli
        .words_file
        .clone()
        .or_else(|| env("WOTD_WORDS_FILE").map(PathBuf::from))
        .or_else(|| config.general.words_file.as_deref().map(config_relative))
        .unwrap_or_else(default_words_file);

    // Log file: env → config. No default: logging to disk is opt-in.
    let log_file = env("WOTD_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(|p| config_relative(&p));

    // Speech command: env → config → default
    let speech_command = env("WOTD_SPEECH_COMMAND")
        .or_else(|| config.speech.command.clone())
        .unwrap_or_else(|| DEFAULT_SPEECH_COMMAND.to_string());

    let speech_enabled = !cli.no_speech && config.speech.enabled.unwrap_or(true);

    let display = DisplaySettings {
        corner: config.display.corner.unwrap_or_default(),
        offset_x: config.display.offset_x.unwrap_or(DEFAULT_OFFSET_X),
        offset_y: config.display.offset_y.unwrap_or(DEFAULT_OFFSET_Y),
        // A panel narrower than this cannot hold its own border and footer
        max_width: config.display.max_width.unwrap_or(DEFAULT_MAX_WIDTH).max(20),
    };

    let retry = RetryPolicy {
        startup_attempts: config
            .retry
            .startup_attempts
            .unwrap_or(DEFAULT_STARTUP_ATTEMPTS)
            .max(1),
        refresh_attempts: config
            .retry
            .refresh_attempts
            .unwrap_or(DEFAULT_REFRESH_ATTEMPTS),
        delay: Duration::from_secs(config.retry.delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)),
    };

    ResolvedConfig {
        words_file,
        log_file,
        display,
        speech_enabled,
        speech_command,
        retry,
    }
}

/// `Words_alphabetized.txt` next to the running executable, or in the
/// working directory if the executable path is unknown.
fn default_words_file() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe
            .parent()
            .map(|dir| dir.join(DEFAULT_WORDS_FILE))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_FILE)),
        Err(e) => {
            warn!("Could not locate executable ({}), looking for words in working directory", e);
            PathBuf::from(DEFAULT_WORDS_FILE)
        }
    }
}

/// Paths in the config file are relative to `~/.wotd/`; `~/` expands to home.
fn config_relative(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = WotdConfig::default();
        assert!(config.general.words_file.is_none());
        assert!(config.display.corner.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&WotdConfig::default(), &CliOverrides::default(), no_env);
        assert!(resolved.words_file.ends_with(DEFAULT_WORDS_FILE));
        assert!(resolved.log_file.is_none());
        assert_eq!(resolved.display, DisplaySettings::default());
        assert!(resolved.speech_enabled);
        assert_eq!(resolved.speech_command, "say");
        assert_eq!(resolved.retry, RetryPolicy::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WotdConfig {
            general: GeneralConfig {
                words_file: Some("/srv/words.txt".to_string()),
                log_file: Some("/tmp/wotd.log".to_string()),
            },
            display: DisplayConfig {
                corner: Some(Corner::BottomRight),
                offset_x: Some(4),
                offset_y: Some(0),
                max_width: Some(40),
            },
            speech: SpeechConfig {
                enabled: Some(false),
                command: Some("espeak".to_string()),
            },
            retry: RetryConfig {
                startup_attempts: Some(3),
                delay_secs: Some(1),
                refresh_attempts: Some(2),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.words_file, PathBuf::from("/srv/words.txt"));
        assert_eq!(resolved.log_file, Some(PathBuf::from("/tmp/wotd.log")));
        assert_eq!(resolved.display.corner, Corner::BottomRight);
        assert_eq!(resolved.display.offset_x, 4);
        assert_eq!(resolved.display.max_width, 40);
        assert!(!resolved.speech_enabled);
        assert_eq!(resolved.speech_command, "espeak");
        assert_eq!(resolved.retry.startup_attempts, 3);
        assert_eq!(resolved.retry.refresh_attempts, 2);
        assert_eq!(resolved.retry.delay, Duration::from_secs(1));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = WotdConfig {
            general: GeneralConfig {
                words_file: Some("/srv/words.txt".to_string()),
                log_file: None,
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "WOTD_WORDS_FILE" => Some("/env/words.txt".to_string()),
            "WOTD_SPEECH_COMMAND" => Some("spd-say".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.words_file, PathBuf::from("/env/words.txt"));
        assert_eq!(resolved.speech_command, "spd-say");
    }

    #[test]
    fn test_cli_wins() {
        let cli = CliOverrides {
            words_file: Some(PathBuf::from("cli.txt")),
            no_speech: true,
        };
        let env = |key: &str| (key == "WOTD_WORDS_FILE").then(|| "/env/words.txt".to_string());
        let resolved = resolve_with_env(&WotdConfig::default(), &cli, env);
        assert_eq!(resolved.words_file, PathBuf::from("cli.txt"));
        assert!(!resolved.speech_enabled);
    }

    #[test]
    fn test_startup_attempts_never_zero() {
        let config = WotdConfig {
            retry: RetryConfig {
                startup_attempts: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.retry.startup_attempts, 1);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
words_file = "words.txt"

[display]
corner = "top-right"
max_width = 50

[speech]
enabled = false

[retry]
delay_secs = 2
"#;
        let config: WotdConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.words_file.as_deref(), Some("words.txt"));
        assert_eq!(config.display.corner, Some(Corner::TopRight));
        assert_eq!(config.display.max_width, Some(50));
        assert_eq!(config.speech.enabled, Some(false));
        assert_eq!(config.retry.delay_secs, Some(2));
        assert!(config.retry.startup_attempts.is_none());
    }

    #[test]
    fn test_unknown_corner_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[display]\ncorner = \"middle\"\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.general.words_file.is_none());
    }

    #[test]
    fn test_absolute_config_path_kept() {
        assert_eq!(config_relative("/abs/words.txt"), PathBuf::from("/abs/words.txt"));
    }
}

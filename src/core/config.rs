//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chatpane/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatpaneConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub nickname: Option<String>,
    pub rooms: Option<Vec<String>>,
    pub log_file: Option<String>,
}

/// Color names as ratatui parses them ("red", "lightblue", "#ff8800", "33").
///
/// Invalid values are reported and replaced by the built-in color when the
/// palette is built.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub bar_fg: Option<String>,
    pub bar_bg: Option<String>,
    pub separator: Option<String>,
    pub info: Option<String>,
    pub current_tab: Option<String>,
    pub moderator: Option<String>,
    pub participant: Option<String>,
    pub visitor: Option<String>,
    pub room_normal: Option<String>,
    pub room_new_message: Option<String>,
    pub room_highlight: Option<String>,
    pub nick_colors: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NICKNAME: &str = "guest";
pub const DEFAULT_LOG_FILE: &str = "chatpane.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub nickname: String,
    pub rooms: Vec<String>,
    pub log_file: String,
    pub theme: ThemeConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
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

/// `~/.chatpane/config.toml`, or `None` without a home directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chatpane").join("config.toml"))
}

/// Commented-out template written on first run. Parses to the defaults.
const CONFIG_TEMPLATE: &str = r#"# Chatpane Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# nickname = "guest"                 # Or set CHATPANE_NICK env var
# rooms = ["lobby", "rust"]          # Joined on startup
# log_file = "chatpane.log"

# [theme]
# bar_fg = "white"
# bar_bg = "blue"
# separator = "blue"
# info = "yellow"
# current_tab = "cyan"
# moderator = "red"
# participant = "blue"
# visitor = "green"
# room_normal = "white"
# room_new_message = "lightblue"
# room_highlight = "lightred"
# nick_colors = ["cyan", "green", "magenta", "yellow", "lightred", "lightblue"]
"#;

/// Load the user's config file; see [`load_from`].
pub fn load_config() -> Result<ChatpaneConfig, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => {
            warn!("No home directory, running on built-in defaults");
            Ok(ChatpaneConfig::default())
        }
    }
}

/// Parse the config at `path`.
///
/// A missing file is not an error: the template is written in its place
/// and the defaults are returned.
pub fn load_from(path: &Path) -> Result<ChatpaneConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Writing config template to {}", path.display());
            if let Err(e) = write_template(path) {
                warn!("Could not write {}: {}", path.display(), e);
            }
            return Ok(ChatpaneConfig::default());
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };
    let config: ChatpaneConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    debug!("Config from {}: {:?}", path.display(), config);
    Ok(config)
}

fn write_template(path: &Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, CONFIG_TEMPLATE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_nick`, `cli_rooms` and `cli_log_file` come from CLI flags
/// (None / empty = not specified).
pub fn resolve(
    config: &ChatpaneConfig,
    cli_nick: Option<&str>,
    cli_rooms: &[String],
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Nickname: CLI → env → config → default
    let nickname = cli_nick
        .map(|s| s.to_string())
        .or_else(|| std::env::var("CHATPANE_NICK").ok())
        .or_else(|| config.general.nickname.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_NICKNAME.to_string());

    // Rooms: CLI replaces the configured list rather than extending it
    let rooms = if cli_rooms.is_empty() {
        config.general.rooms.clone().unwrap_or_default()
    } else {
        cli_rooms.to_vec()
    };

    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        nickname,
        rooms,
        log_file,
        theme: config.theme.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ChatpaneConfig::default();
        assert!(config.general.nickname.is_none());
        assert!(config.theme.nick_colors.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = ChatpaneConfig::default();
        let resolved = resolve(&config, Some(DEFAULT_NICKNAME), &[], None);
        assert_eq!(resolved.nickname, DEFAULT_NICKNAME);
        assert!(resolved.rooms.is_empty());
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ChatpaneConfig {
            general: GeneralConfig {
                nickname: Some("from-file".to_string()),
                rooms: Some(vec!["lobby".to_string()]),
                log_file: Some("file.log".to_string()),
            },
            ..Default::default()
        };
        let rooms = vec!["rust".to_string()];
        let resolved = resolve(&config, Some("from-cli"), &rooms, Some("cli.log"));
        assert_eq!(resolved.nickname, "from-cli");
        assert_eq!(resolved.rooms, vec!["rust".to_string()]);
        assert_eq!(resolved.log_file, "cli.log");
    }

    #[test]
    fn test_resolve_blank_nick_falls_back() {
        let config = ChatpaneConfig::default();
        let resolved = resolve(&config, Some("  "), &[], None);
        assert_eq!(resolved.nickname, DEFAULT_NICKNAME);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r##"
[general]
nickname = "louiz"
rooms = ["lobby", "rust"]

[theme]
bar_bg = "blue"
current_tab = "#00ffff"
nick_colors = ["red", "green"]
"##;
        let config: ChatpaneConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.nickname.as_deref(), Some("louiz"));
        assert_eq!(config.general.rooms.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.theme.current_tab.as_deref(), Some("#00ffff"));
        assert_eq!(config.theme.nick_colors.as_ref().map(Vec::len), Some(2));
        assert!(config.theme.moderator.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[theme]
info = "yellow"
"#;
        let config: ChatpaneConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme.info.as_deref(), Some("yellow"));
        assert!(config.general.nickname.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = toml::from_str::<ChatpaneConfig>("[general\nnickname = 1").unwrap_err();
        let err = ConfigError::Parse(err);
        assert!(err.to_string().starts_with("config parse error"));
    }

    /// Fresh scratch directory under the system temp dir.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chatpane-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: ChatpaneConfig = toml::from_str(CONFIG_TEMPLATE).unwrap();
        assert!(config.general.nickname.is_none());
        assert!(config.general.rooms.is_none());
        assert!(config.theme.nick_colors.is_none());
    }

    #[test]
    fn test_missing_file_writes_template() {
        let dir = scratch_dir("missing");
        let path = dir.join("nested").join("config.toml");

        let config = load_from(&path).unwrap();

        assert!(config.general.nickname.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG_TEMPLATE);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_existing_file_is_parsed() {
        let dir = scratch_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general]\nnickname = \"louiz\"\n").unwrap();

        let config = load_from(&path).unwrap();

        assert_eq!(config.general.nickname.as_deref(), Some("louiz"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\n").unwrap();

        assert!(matches!(load_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }
}

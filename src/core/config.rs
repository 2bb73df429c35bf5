//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navtree/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The menu tree itself is part of the config: `[[nav.items]]` entries,
//! nested through `children`.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::node::NavNode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavtreeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub nav: NavConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    pub selected: Option<String>,
    pub items: Option<Vec<MenuEntry>>,
}

/// One menu entry as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    Item {
        name: String,
        label: Option<String>,
    },
    Group {
        name: String,
        title: Option<String>,
        #[serde(default)]
        children: Vec<MenuEntry>,
    },
}

impl From<MenuEntry> for NavNode {
    /// Missing labels and titles fall back to the entry's name.
    fn from(entry: MenuEntry) -> Self {
        match entry {
            MenuEntry::Item { label, name } => {
                let label = label.unwrap_or_else(|| name.clone());
                NavNode::item(name, label)
            }
            MenuEntry::Group {
                title,
                name,
                children,
            } => {
                let title = title.unwrap_or_else(|| name.clone());
                NavNode::group(name, title).children(children.into_iter().map(NavNode::from))
            }
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "navtree.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_SELECTED: &str = "home";
pub const SELECTED_ENV_VAR: &str = "NAVTREE_SELECTED";

/// Menu shown when the config doesn't define one.
pub fn default_menu() -> Vec<NavNode> {
    vec![
        NavNode::item("home", "Home"),
        NavNode::group("about", "About").children([
            NavNode::item("culture", "Culture"),
            NavNode::item("developers", "Developers"),
        ]),
        NavNode::item("hire", "Hire"),
    ]
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub selected: String,
    pub menu: Vec<NavNode>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
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

/// Returns the path to `~/.navtree/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navtree").join("config.toml"))
}

/// Where the loaded config came from.
///
/// Returned by [`load_config`], which runs before the logger exists. The
/// caller reports it with [`ConfigSource::log`] after logger init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from a file (explicit or `~/.navtree/config.toml`)
    File(PathBuf),
    /// No file existed; a commented default was written (or failed to be)
    Generated { path: PathBuf, error: Option<String> },
    /// No home directory, so no config file at all
    NoHome,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated { path, error: None } => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::Generated {
                path,
                error: Some(e),
            } => warn!("Failed to write default config to {}: {}", path.display(), e),
            ConfigSource::NoHome => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `explicit` if given, else from `~/.navtree/config.toml`.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an error: the user asked for it by name.
pub fn load_config(explicit: Option<&Path>) -> Result<(NavtreeConfig, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let Some(path) = config_path() else {
        return Ok((NavtreeConfig::default(), ConfigSource::NoHome));
    };

    if !path.exists() {
        let error = generate_default_config(&path).err().map(|e| e.to_string());
        return Ok((NavtreeConfig::default(), ConfigSource::Generated { path, error }));
    }

    let config = read_config(&path)?;
    Ok((config, ConfigSource::File(path)))
}

fn read_config(path: &Path) -> Result<NavtreeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<NavtreeConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# navtree Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "navtree.log"
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"

# [nav]
# selected = "home"                  # Or set NAVTREE_SELECTED env var

# [[nav.items]]
# kind = "item"
# name = "home"
# label = "Home"

# [[nav.items]]
# kind = "group"
# name = "about"
# title = "About"
# children = [
#   { kind = "item", name = "culture", label = "Culture" },
#   { kind = "item", name = "developers", label = "Developers" },
# ]
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_selected` is from the `--selected` flag (None = not specified).
pub fn resolve(config: &NavtreeConfig, cli_selected: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_selected, std::env::var(SELECTED_ENV_VAR).ok())
}

/// [`resolve`] with the `NAVTREE_SELECTED` value passed in rather than read
/// from the process environment.
pub fn resolve_with_env(
    config: &NavtreeConfig,
    cli_selected: Option<&str>,
    env_selected: Option<String>,
) -> ResolvedConfig {
    // Selected: CLI → env → config → default
    let selected = cli_selected
        .map(|s| s.to_string())
        .or(env_selected)
        .or_else(|| config.nav.selected.clone())
        .unwrap_or_else(|| DEFAULT_SELECTED.to_string());

    let menu = match &config.nav.items {
        Some(items) => items.iter().cloned().map(NavNode::from).collect(),
        None => default_menu(),
    };

    let log_level = match config.general.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        selected,
        menu,
        log_file: PathBuf::from(
            config
                .general
                .log_file
                .as_deref()
                .unwrap_or(DEFAULT_LOG_FILE),
        ),
        log_level,
    }
}

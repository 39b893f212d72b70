//! Application configuration.
//!
//! Two sources feed the configuration:
//!
//! * the environment, which locates the Hyprland command socket and is
//!   required, and
//! * an optional JSON file (`$XDG_CONFIG_HOME/hyprhelper/config.json`) with
//!   defaults for the external programs.
//!
//! # Example
//!
//! ```json
//! {
//!   "dropdown": { "terminal": "foot", "session": "drop" },
//!   "menu": { "program": "wofi", "args": ["--dmenu"] }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; `{}` is a valid file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

/// Dropdown terminal defaults.  CLI flags take precedence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Terminal emulator binary.  It must accept `--class` and `-e`.
    pub terminal: String,
    /// Multiplexer session the terminal attaches to.
    pub session: String,
    /// Window class used to recognise the dropdown window.
    pub class: String,
    /// Multiplexer binary (tmux-compatible command line).
    pub multiplexer: String,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            terminal: "alacritty".into(),
            session: "hypr".into(),
            class: "dropdown-term".into(),
            multiplexer: "tmux".into(),
        }
    }
}

/// Picker used by `unminimize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub program: String,
    /// Arguments must make the program print the selected index.
    pub args: Vec<String>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            program: "rofi".into(),
            args: ["-p", "󱂬  Restore", "-i", "-dmenu", "-format", "i"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Errors from resolving or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolve the Hyprland command socket path from the environment.
///
/// Hyprland ≥ 0.40 stores its sockets at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
pub fn socket_path() -> Result<PathBuf, ConfigError> {
    socket_path_from(|key| std::env::var(key).ok())
}

fn socket_path_from(
    var: impl Fn(&'static str) -> Option<String>,
) -> Result<PathBuf, ConfigError> {
    let runtime_dir =
        var("XDG_RUNTIME_DIR").ok_or(ConfigError::MissingEnv("XDG_RUNTIME_DIR"))?;
    let his = var("HYPRLAND_INSTANCE_SIGNATURE")
        .ok_or(ConfigError::MissingEnv("HYPRLAND_INSTANCE_SIGNATURE"))?;
    Ok(PathBuf::from(runtime_dir)
        .join("hypr")
        .join(his)
        .join(".socket.sock"))
}

/// Default config file location (`$XDG_CONFIG_HOME/hyprhelper/config.json`).
pub fn default_config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("hyprhelper").join("config.json")
}

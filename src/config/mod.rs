// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, loading and saving the
//! toast tuning values in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Auto-dismiss delay, animation durations, gesture distances
//!   and layout margins
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an explicit directory to `load_with_override()`
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.default_duration_ms = Some(4000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedToast";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_TOAST_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast timing, gesture and layout settings.
///
/// Every field is optional in the file; missing fields take the defaults from
/// [`defaults`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastSection {
    /// Auto-dismiss delay used when a toast does not set its own.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,

    /// Fade/slide-in duration.
    #[serde(default = "default_enter_ms", skip_serializing_if = "Option::is_none")]
    pub enter_duration_ms: Option<u64>,

    /// Slide-out duration after a swipe.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_duration_ms: Option<u64>,

    /// Horizontal travel before a press becomes a drag.
    #[serde(default = "default_drag_activation", skip_serializing_if = "Option::is_none")]
    pub drag_activation_px: Option<f32>,

    /// Horizontal travel at release that dismisses the toast.
    #[serde(default = "default_dismiss_threshold", skip_serializing_if = "Option::is_none")]
    pub dismiss_threshold_px: Option<f32>,

    /// Distance a dismissed toast slides out to.
    #[serde(default = "default_exit_distance", skip_serializing_if = "Option::is_none")]
    pub exit_distance_px: Option<f32>,

    /// Distance of the top and bottom layers from the viewport edge.
    #[serde(default = "default_anchor_margin", skip_serializing_if = "Option::is_none")]
    pub anchor_margin_px: Option<f32>,

    /// Gap between stacked toasts.
    #[serde(default = "default_stack_spacing", skip_serializing_if = "Option::is_none")]
    pub stack_spacing_px: Option<f32>,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self {
            default_duration_ms: default_duration_ms(),
            enter_duration_ms: default_enter_ms(),
            exit_duration_ms: default_exit_ms(),
            drag_activation_px: default_drag_activation(),
            dismiss_threshold_px: default_dismiss_threshold(),
            exit_distance_px: default_exit_distance(),
            anchor_margin_px: default_anchor_margin(),
            stack_spacing_px: default_stack_spacing(),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastSection,
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

fn default_duration_ms() -> Option<u64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_enter_ms() -> Option<u64> {
    Some(DEFAULT_ENTER_DURATION_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_DURATION_MS)
}

fn default_drag_activation() -> Option<f32> {
    Some(DEFAULT_DRAG_ACTIVATION_PX)
}

fn default_dismiss_threshold() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD_PX)
}

fn default_exit_distance() -> Option<f32> {
    Some(DEFAULT_EXIT_DISTANCE_PX)
}

fn default_anchor_margin() -> Option<f32> {
    Some(DEFAULT_ANCHOR_MARGIN_PX)
}

fn default_stack_spacing() -> Option<f32> {
    Some(DEFAULT_STACK_SPACING_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the explicit override first, then
/// the environment variable, then the platform default.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = base_dir {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns the config and an optional warning. A missing file is not a
/// warning; an unreadable or malformed one is, and yields defaults.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

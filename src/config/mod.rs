// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Marker size, image scale and zoom bounds
//! - `[gesture]` - Tap threshold, viewport clamping and reverse animation
//! - `[annotation]` - Where new notes are placed relative to their marker
//!
//! Every field is optional; missing fields take the defaults from [`defaults`]
//! and out-of-range values are clamped by the `*_or_default` accessors.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `FLOORPIN_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use floorpin::config;
//!
//! let (mut config, _warning) = config::load();
//! config.display.marker_size = Some(32.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Display settings for markers and the pan/zoom transform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Marker diameter in screen pixels.
    #[serde(default = "default_marker_size", skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<f32>,

    /// Multiplier applied to the probed image dimensions.
    #[serde(default = "default_image_scale", skip_serializing_if = "Option::is_none")]
    pub image_scale: Option<f32>,

    /// Lowest zoom factor.
    #[serde(default = "default_min_scale", skip_serializing_if = "Option::is_none")]
    pub min_scale: Option<f32>,

    /// Highest zoom factor.
    #[serde(default = "default_max_scale", skip_serializing_if = "Option::is_none")]
    pub max_scale: Option<f32>,

    /// Multiplicative zoom step per wheel notch or key press.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            marker_size: default_marker_size(),
            image_scale: default_image_scale(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            zoom_step: default_zoom_step(),
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn marker_size_or_default(&self) -> f32 {
        self.marker_size
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_MARKER_SIZE)
            .clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
    }

    #[must_use]
    pub fn image_scale_or_default(&self) -> f32 {
        self.image_scale
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_IMAGE_SCALE)
    }

    /// Returns `(min, max)` zoom bounds, always ordered and inside the
    /// global limits.
    #[must_use]
    pub fn scale_bounds(&self) -> (f32, f32) {
        let min = self
            .min_scale
            .filter(|v| v.is_finite())
            .unwrap_or(MIN_SCALE)
            .clamp(MIN_SCALE, MAX_SCALE);
        let max = self
            .max_scale
            .filter(|v| v.is_finite())
            .unwrap_or(MAX_SCALE)
            .clamp(MIN_SCALE, MAX_SCALE);
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }

    #[must_use]
    pub fn zoom_step_or_default(&self) -> f32 {
        self.zoom_step
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_ZOOM_STEP)
            .clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP)
    }
}

/// Pointer gesture settings shared by every draggable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureConfig {
    /// Movement (per axis, in pixels) below which a gesture counts as a tap.
    #[serde(default = "default_tap_threshold", skip_serializing_if = "Option::is_none")]
    pub tap_threshold: Option<f32>,

    /// Keep dragged markers inside the viewport.
    #[serde(default = "default_clamp_to_viewport", skip_serializing_if = "Option::is_none")]
    pub clamp_to_viewport: Option<bool>,

    /// Animate dragged markers back to their anchor when released.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_on_release: Option<bool>,

    /// Duration of the return animation in milliseconds.
    #[serde(
        default = "default_reverse_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reverse_duration_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_threshold: default_tap_threshold(),
            clamp_to_viewport: default_clamp_to_viewport(),
            reverse_on_release: Some(false),
            reverse_duration_ms: default_reverse_duration_ms(),
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn tap_threshold_or_default(&self) -> f32 {
        self.tap_threshold
            .filter(|v| v.is_finite())
            .unwrap_or(DEFAULT_TAP_THRESHOLD)
            .clamp(0.0, MAX_TAP_THRESHOLD)
    }

    #[must_use]
    pub fn reverse_duration(&self) -> Duration {
        Duration::from_millis(
            self.reverse_duration_ms
                .unwrap_or(DEFAULT_REVERSE_DURATION_MS)
                .min(MAX_REVERSE_DURATION_MS),
        )
    }
}

/// Placement of notes attached to markers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnnotationConfig {
    /// Horizontal note offset from its marker, in image units.
    #[serde(default = "default_note_offset_x", skip_serializing_if = "Option::is_none")]
    pub note_offset_x: Option<f32>,

    /// Vertical note offset from its marker, in image units.
    #[serde(default = "default_note_offset_y", skip_serializing_if = "Option::is_none")]
    pub note_offset_y: Option<f32>,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            note_offset_x: default_note_offset_x(),
            note_offset_y: default_note_offset_y(),
        }
    }
}

impl AnnotationConfig {
    /// Note offset as an image-space vector.
    #[must_use]
    pub fn note_offset(&self) -> iced::Vector {
        iced::Vector::new(
            self.note_offset_x.unwrap_or(DEFAULT_NOTE_OFFSET_X),
            self.note_offset_y.unwrap_or(DEFAULT_NOTE_OFFSET_Y),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub gesture: GestureConfig,

    #[serde(default)]
    pub annotation: AnnotationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_marker_size() -> Option<f32> {
    Some(DEFAULT_MARKER_SIZE)
}

fn default_image_scale() -> Option<f32> {
    Some(DEFAULT_IMAGE_SCALE)
}

fn default_min_scale() -> Option<f32> {
    Some(MIN_SCALE)
}

fn default_max_scale() -> Option<f32> {
    Some(MAX_SCALE)
}

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

fn default_tap_threshold() -> Option<f32> {
    Some(DEFAULT_TAP_THRESHOLD)
}

fn default_clamp_to_viewport() -> Option<bool> {
    Some(true)
}

fn default_reverse_duration_ms() -> Option<u64> {
    Some(DEFAULT_REVERSE_DURATION_MS)
}

fn default_note_offset_x() -> Option<f32> {
    Some(DEFAULT_NOTE_OFFSET_X)
}

fn default_note_offset_y() -> Option<f32> {
    Some(DEFAULT_NOTE_OFFSET_Y)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
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

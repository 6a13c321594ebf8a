// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageInfo;
use crate::ui::canvas;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Canvas(canvas::Message),
    /// Result of reading the dimensions of an image file.
    ImageProbed(Result<ImageInfo, Error>),
    /// Trigger the open file dialog.
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    Tick(Instant), // Animation frame while a marker returns to its origin
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image path to load on startup.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLOORPIN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Marker size override in pixels, applied on top of the config file.
    pub marker_size: Option<f32>,
}

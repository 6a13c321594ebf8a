// SPDX-License-Identifier: MPL-2.0
//! Image source handling.
//!
//! Only the dimensions are read eagerly; pixel decoding is left to the
//! renderer through an iced image handle.

use crate::error::Result;
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// A probed image ready for display.
#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub handle: image::Handle,
}

/// Reads the image header at `path` to get its dimensions.
pub fn probe(path: &Path) -> Result<ImageInfo> {
    let (width, height) = image_rs::image_dimensions(path)?;
    Ok(ImageInfo {
        path: path.to_path_buf(),
        width,
        height,
        handle: image::Handle::from_path(path),
    })
}

/// Async wrapper for use with `Task::perform`.
pub async fn probe_async(path: PathBuf) -> Result<ImageInfo> {
    probe(&path)
}

/// Whether `path` has an extension the open dialog would offer.
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::error::Error;
use crate::media::{self, ImageInfo};
use crate::ui::canvas;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a> {
    pub canvas: &'a mut canvas::State,
    /// Image currently being probed.
    pub loading: &'a mut Option<PathBuf>,
    /// Directory the open dialog starts in.
    pub last_open_directory: &'a mut Option<PathBuf>,
}

/// Forwards a message to the canvas and logs what came of it.
pub fn handle_canvas_message(ctx: &mut UpdateContext<'_>, message: canvas::Message) -> Task<Message> {
    match ctx.canvas.handle(message) {
        canvas::Effect::None | canvas::Effect::MarkerAdded(_) => {}
        canvas::Effect::MenuOpened(marker) => {
            log::debug!("annotation menu opened for marker {marker}");
        }
        canvas::Effect::NoteAttached { marker, note } => {
            log::info!("note {note} attached to marker {marker}");
        }
        canvas::Effect::EditRequested(marker) => {
            // Defect editing has no screen yet; the request is only recorded
            log::info!("edit defect requested for marker {marker}");
        }
    }
    Task::none()
}

/// Advances running animations.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.canvas.handle(canvas::Message::Tick(now));
    Task::none()
}

/// Starts probing the image at `path`.
pub fn load_image(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    log::info!("loading {}", path.display());
    *ctx.loading = Some(path.clone());
    Task::perform(media::probe_async(path), Message::ImageProbed)
}

/// Handles the probe result. A failure keeps whatever is displayed.
pub fn handle_image_probed(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageInfo, Error>,
) -> Task<Message> {
    let requested = ctx.loading.take();
    match result {
        Ok(info) => {
            if requested.as_ref().is_some_and(|path| *path != info.path) {
                // A newer request superseded this one
                *ctx.loading = requested;
                return Task::none();
            }
            *ctx.last_open_directory = info.path.parent().map(std::path::Path::to_path_buf);
            ctx.canvas.set_image(info);
        }
        Err(err) => {
            let path = requested
                .as_deref()
                .map_or_else(|| "image".to_string(), |p| p.display().to_string());
            log::warn!("failed to load {path}: {err}");
        }
    }
    Task::none()
}

/// Handles the open file dialog request.
pub fn handle_open_file_dialog(last_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title("Open image")
                .add_filter("Images", media::SUPPORTED_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Handles the result of the open file dialog.
pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    load_image(ctx, path)
}

/// Handles a file dropped on the window. Files that are not images are
/// ignored.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if path.is_dir() || !media::is_supported(&path) {
        log::warn!("ignoring dropped file {}", path.display());
        return Task::none();
    }
    load_image(ctx, path)
}

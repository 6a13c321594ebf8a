// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the marker canvas and translates top-level messages
//! into canvas updates or side effects like probing an image file.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::ui::canvas::{self, CanvasSettings};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const APP_TITLE: &str = "FloorPin";
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    canvas: canvas::State,
    /// Image currently being probed.
    loading: Option<PathBuf>,
    /// Directory the open dialog starts in.
    last_open_directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_image", &self.canvas.image().is_some())
            .field("markers", &self.canvas.markers().len())
            .field("loading", &self.loading)
            .finish()
    }
}

fn window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: window_size(),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl App {
    /// Initializes application state and optionally kicks off asynchronous image
    /// probing based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }
        if let Some(size) = flags.marker_size {
            config.display.marker_size = Some(size);
        }

        let mut app = Self::with_config(&config);
        let task = match flags.file_path {
            Some(path) => app.load(PathBuf::from(path)),
            None => Task::none(),
        };
        (app, task)
    }

    fn with_config(config: &Config) -> Self {
        Self {
            canvas: canvas::State::new(CanvasSettings::from_config(config), window_size()),
            loading: None,
            last_open_directory: None,
        }
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            canvas: &mut self.canvas,
            loading: &mut self.loading,
            last_open_directory: &mut self.last_open_directory,
        }
    }

    fn load(&mut self, path: PathBuf) -> Task<Message> {
        update::load_image(&mut self.context(), path)
    }

    fn title(&self) -> String {
        let file_name = self
            .canvas
            .image()
            .and_then(|info| info.path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.canvas.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Canvas(canvas_message) => {
                update::handle_canvas_message(&mut ctx, canvas_message)
            }
            Message::ImageProbed(result) => update::handle_image_probed(&mut ctx, result),
            Message::OpenFileDialog => {
                update::handle_open_file_dialog(self.last_open_directory.clone())
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut ctx, path)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            canvas: &self.canvas,
            loading: self.loading.is_some(),
        })
    }
}

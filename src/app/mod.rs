// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns the gallery controller, the keyboard listener registry and
//! localization. It scans a directory, binds the gallery to in-memory surfaces
//! and turns the controller's scheduled swaps into timed tasks.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::navigation_key;

use crate::config::{self, Config};
use crate::directory_scanner::ImageList;
use crate::domain::gallery::{FadeDelay, TransitionPolicy};
use crate::gallery::{self, transition, Bindings, Controls, Effect, GalleryController, Options};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{surface, CounterLabel, ListenerRegistry};
use crate::ui::gallery::PageGallery;
use iced::{window, Element, Subscription, Task};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    directory: PathBuf,
    gallery: Option<PageGallery>,
    keyboard: ListenerRegistry,
    /// Last scan failure, shown by the empty state.
    scan_error: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("images", &self.gallery.as_ref().map(PageGallery::len))
            .field("listeners", &self.keyboard.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings from disk, then builds the application.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(key) = warning {
            tracing::warn!(key, "using default settings");
        }
        (Self::with_config(flags, config), Task::none())
    }

    /// Builds the application from explicit settings; command-line flags win.
    pub fn with_config(flags: Flags, mut config: Config) -> Self {
        if let Some(fade_ms) = flags.fade_ms {
            config.gallery.fade_delay_ms = Some(fade_ms);
        }
        if flags.cancel_pending {
            config.gallery.transition_policy = Some(TransitionPolicy::CancelPending);
        }

        let directory = flags
            .directory
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut app = Self {
            i18n: I18n::new(flags.lang, &config),
            config,
            directory,
            gallery: None,
            keyboard: ListenerRegistry::new(),
            scan_error: None,
        };
        app.load_gallery();
        app
    }

    /// Tears down the current gallery, rescans the directory and binds a new one.
    fn load_gallery(&mut self) {
        if let Some(mut previous) = self.gallery.take() {
            previous.teardown(&mut self.keyboard);
        }
        self.scan_error = None;

        let images = match ImageList::scan_directory(&self.directory, self.config.gallery.sort_order()) {
            Ok(list) => {
                tracing::info!(
                    directory = %list.directory().display(),
                    images = list.len(),
                    "directory scanned"
                );
                list.sources()
            }
            Err(err) => {
                tracing::warn!(directory = %self.directory.display(), %err, "scan failed");
                self.scan_error = Some(err.to_string());
                return;
            }
        };

        let (main_display, thumbnails) = match surface::build_surfaces(&images) {
            Some((display, slots)) => (Some(display), slots),
            None => (None, Vec::new()),
        };

        self.gallery = GalleryController::bind(
            Bindings {
                main_display,
                thumbnails,
                controls: Controls::both(),
                counter: Some(CounterLabel::default()),
            },
            self.options(),
            &mut self.keyboard,
        );
    }

    fn options(&self) -> Options {
        Options {
            fade_delay: self.config.gallery.fade_delay(),
            policy: self.config.gallery.transition_policy(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr_with_args(
            "window-title-with-directory",
            &[("directory", &self.directory.display().to_string())],
        )
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_gallery_key_subscription(self.keyboard.has_listeners()),
            subscription::create_rescan_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                let Some(controller) = self.gallery.as_mut() else {
                    return Task::none();
                };
                match controller.handle(gallery_message) {
                    Effect::ScheduleSwap(swap) => Task::perform(transition::elapse(swap), |ticket| {
                        Message::Gallery(gallery::Message::SwapDue(ticket))
                    }),
                    Effect::None => Task::none(),
                }
            }
            Message::Rescan => {
                tracing::info!(directory = %self.directory.display(), "rescanning");
                self.load_gallery();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: self.gallery.as_ref(),
            directory: &self.directory,
            scan_error: self.scan_error.as_deref(),
            thumbnail_size: self.config.gallery.thumbnail_size(),
        })
    }

    /// Bound gallery, if the directory held at least one image.
    pub fn gallery(&self) -> Option<&PageGallery> {
        self.gallery.as_ref()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn fade_delay(&self) -> FadeDelay {
        self.config.gallery.fade_delay()
    }

    /// Number of keyboard listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.keyboard.len()
    }

    pub fn scan_error(&self) -> Option<&str> {
        self.scan_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{MainDisplay, NavigationKey};
    use std::fs;
    use tempfile::tempdir;

    fn directory_with_images(names: &[&str]) -> tempfile::TempDir {
        let dir = tempdir().expect("temp dir");
        for name in names {
            fs::write(dir.path().join(name), b"fake image data").expect("write image");
        }
        dir
    }

    fn app_for(dir: &Path, flags: Flags) -> App {
        App::with_config(
            Flags {
                lang: Some("en-US".to_string()),
                directory: Some(dir.to_path_buf()),
                ..flags
            },
            Config::default(),
        )
    }

    #[test]
    fn binds_gallery_for_directory_with_images() {
        let dir = directory_with_images(&["b.png", "a.jpg", "c.gif"]);
        let app = app_for(dir.path(), Flags::default());

        let gallery = app.gallery().expect("gallery bound");
        assert_eq!(gallery.len(), 3);
        assert_eq!(app.listener_count(), 1);
        assert!(gallery.display().source().as_path().ends_with("a.jpg"));
    }

    #[test]
    fn empty_directory_binds_nothing() {
        let dir = directory_with_images(&["notes.txt"]);
        let app = app_for(dir.path(), Flags::default());

        assert!(app.gallery().is_none());
        assert_eq!(app.listener_count(), 0);
        assert!(app.scan_error().is_none());
    }

    #[test]
    fn unreadable_directory_records_scan_error() {
        let dir = tempdir().expect("temp dir");
        let app = app_for(&dir.path().join("missing"), Flags::default());

        assert!(app.gallery().is_none());
        assert!(app.scan_error().is_some());
    }

    #[test]
    fn flags_override_settings() {
        let dir = directory_with_images(&["a.png"]);
        let app = app_for(
            dir.path(),
            Flags {
                fade_ms: Some(400),
                cancel_pending: true,
                ..Flags::default()
            },
        );

        assert_eq!(app.fade_delay().as_millis(), 400);
        assert_eq!(
            app.gallery().expect("bound").policy(),
            TransitionPolicy::CancelPending
        );
    }

    #[test]
    fn gallery_messages_move_the_cursor() {
        let dir = directory_with_images(&["a.png", "b.png", "c.png"]);
        let mut app = app_for(dir.path(), Flags::default());

        let _ = app.update(Message::Gallery(gallery::Message::KeyPressed(
            NavigationKey::ArrowLeft,
        )));
        assert_eq!(app.gallery().expect("bound").cursor(), 2);

        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailClicked(1)));
        assert_eq!(app.gallery().expect("bound").cursor(), 1);
    }

    #[test]
    fn rescan_replaces_gallery_without_leaking_listeners() {
        let dir = directory_with_images(&["a.png"]);
        let mut app = app_for(dir.path(), Flags::default());
        let first_listener = app.gallery().and_then(PageGallery::listener);

        fs::write(dir.path().join("b.png"), b"fake image data").expect("write image");
        let _ = app.update(Message::Rescan);

        let gallery = app.gallery().expect("bound");
        assert_eq!(gallery.len(), 2);
        assert_ne!(gallery.listener(), first_listener);
        assert_eq!(app.listener_count(), 1);
    }

    #[test]
    fn swap_due_from_before_rescan_is_ignored() {
        let dir = directory_with_images(&["a.png", "b.png", "c.png"]);
        let mut app = app_for(dir.path(), Flags::default());

        let leftover = app
            .gallery
            .as_mut()
            .and_then(PageGallery::next)
            .expect("swap scheduled");
        let _ = app.update(Message::Rescan);
        let _ = app.update(Message::Gallery(gallery::Message::Next));

        let _ = app.update(Message::Gallery(gallery::Message::SwapDue(leftover.ticket)));

        let gallery = app.gallery().expect("bound");
        assert_eq!(gallery.pending_swaps(), 1);
        assert!(gallery.display().opacity().is_transparent());
    }

    #[test]
    fn title_names_the_directory() {
        let dir = directory_with_images(&["a.png"]);
        let app = app_for(dir.path(), Flags::default());
        assert!(app.title().contains(&dir.path().display().to_string()));
    }
}

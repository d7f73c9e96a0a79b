// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the watch page.
//!
//! The `App` struct wires together the page state (visibility toggles,
//! panel position, playhead, link bar) with localization and persisted
//! preferences, and translates messages into side effects like config
//! persistence or clipboard writes. Policy decisions (window sizing,
//! persistence format, localization switching) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, DEFAULT_SEEK_STEP_SECS};
use crate::i18n::fluent::I18n;
use crate::player::{Playhead, SeekStep};
use crate::ui::link_bar;
use crate::ui::state::{PanelPosition, SectionVisibility};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state that bridges the page regions,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    visibility: SectionVisibility,
    /// Settings panel position; `None` when a persisted value was garbled.
    panel: Option<PanelPosition>,
    playhead: Playhead,
    seek_step: SeekStep,
    link_bar: link_bar::State,
    stream_title: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panel", &self.panel)
            .field("stream_title", &self.stream_title)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            visibility: SectionVisibility::new(),
            panel: Some(PanelPosition::OffScreenRight),
            playhead: Playhead::new(),
            seek_step: SeekStep::default(),
            link_bar: link_bar::State::default(),
            stream_title: String::new(),
        }
    }
}

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from CLI flags and persisted
    /// preferences. Runs exactly once per launch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.visibility
            .set_hide_metadata(config.hide_metadata.unwrap_or(false));
        app.visibility
            .set_simple_view(config.simple_view.unwrap_or(false));
        app.seek_step = SeekStep::new(config.seek_step_secs.unwrap_or(DEFAULT_SEEK_STEP_SECS));
        app.panel = restore_panel(config.panel.as_deref());

        let url = flags.url.unwrap_or_default();
        app.stream_title = stream_title_from_url(&url, &app.i18n);
        app.link_bar = link_bar::State::new(url);

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("{} - {}", self.stream_title, self.i18n.tr("app-title"))
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            visibility: &self.visibility,
            panel_open: self.panel.is_some_and(PanelPosition::is_open),
            stream_title: &self.stream_title,
            playhead: &self.playhead,
            link_bar: &self.link_bar,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::keyboard_subscription()
    }

    /// Writes the current preferences back to `settings.toml`.
    fn persist_preferences(&self) {
        let config = config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            hide_metadata: Some(self.visibility.hide_metadata()),
            simple_view: Some(self.visibility.simple_view()),
            seek_step_secs: Some(self.seek_step.value()),
            panel: self.panel.map(|p| p.as_str().to_string()),
        };
        // Best effort: a read-only config dir must not interrupt the session.
        let _ = config::save(&config);
    }
}

/// Restores the panel position from its persisted value.
///
/// An absent preference is the markup default, closed. Only a value that
/// is present but unrecognized leaves the panel in the unknown state,
/// which the toggle resolves to closed.
fn restore_panel(persisted: Option<&str>) -> Option<PanelPosition> {
    persisted.map_or(Some(PanelPosition::OffScreenRight), PanelPosition::parse)
}

/// Derives a human-readable stream title from the last URL path segment.
fn stream_title_from_url(url: &str, i18n: &I18n) -> String {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| i18n.tr("title-fallback"))
}

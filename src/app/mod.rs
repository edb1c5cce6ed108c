// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the components (navbar, banner,
//! storefront, newsletter, preview, notifications) and translates their
//! events into side effects like config persistence or asset loading. Policy
//! decisions (window sizing, the language fade length, the shared tick
//! cadence) stay close to the main update loop so user-facing behavior is
//! easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Book};
use crate::config::{self, Config};
use crate::i18n::{self, strings, Locale};
use crate::ui::banner;
use crate::ui::newsletter;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::storefront;
use iced::{window, Task, Theme};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Length of the text cross-fade when the language changes. Input
/// placeholders skip the fade and follow the target locale immediately.
pub const LANGUAGE_FADE: Duration = Duration::from_millis(150);

/// Cadence of the shared timer subscription. Every time-driven component
/// (banner autoplay, toast expiry, card reveal) is a deadline checked
/// against this one tick.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Root Iced application state.
pub struct App {
    locale: Locale,
    /// Target locale while the text transition runs; `None` when settled.
    pending_locale: Option<Locale>,
    catalog: Vec<Book>,
    banner: banner::State,
    storefront: storefront::State,
    newsletter: newsletter::State,
    preview: preview::State,
    notifications: notifications::Manager,
    /// Whether the section menu dropdown is open.
    menu_open: bool,
    /// Alternate settings file; `None` uses the platform config directory.
    config_path: Option<PathBuf>,
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// launcher flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(flags.config_path.as_deref());
        let locale = i18n::resolve_locale(flags.lang.as_deref(), &config);

        let app = App {
            locale,
            pending_locale: None,
            catalog: catalog::catalog(),
            banner: banner::State::new(banner::slides()),
            storefront: storefront::State::new(Instant::now()),
            newsletter: newsletter::State::new(),
            preview: preview::State::new(),
            notifications: notifications::Manager::new(),
            menu_open: false,
            config_path: flags.config_path,
        };
        (app, Task::none())
    }

    pub fn title(&self) -> String {
        strings::WINDOW_TITLE.get(self.locale).to_string()
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The locale a switch is transitioning towards, if one is in flight.
    #[must_use]
    pub fn pending_locale(&self) -> Option<Locale> {
        self.pending_locale
    }

    #[must_use]
    pub fn catalog(&self) -> &[Book] {
        &self.catalog
    }

    #[must_use]
    pub fn banner(&self) -> &banner::State {
        &self.banner
    }

    #[must_use]
    pub fn storefront(&self) -> &storefront::State {
        &self.storefront
    }

    #[must_use]
    pub fn newsletter(&self) -> &newsletter::State {
        &self.newsletter
    }

    #[must_use]
    pub fn preview(&self) -> &preview::State {
        &self.preview
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }
}

fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "failed to load settings, using defaults");
            Config::default()
        }
    }
}

fn window_settings() -> window::Settings {
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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
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

// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::PreviewError;
use crate::i18n::Locale;
use crate::ui::banner;
use crate::ui::navbar;
use crate::ui::newsletter;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::storefront;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Banner(banner::Message),
    Storefront(storefront::Message),
    Newsletter(newsletter::Message),
    Preview(preview::Message),
    Notification(notifications::Message),
    /// The text transition finished; the new locale takes effect.
    LocaleApplied(Locale),
    /// The fixed loading delay elapsed; the preview viewer is revealed.
    PreviewRevealed,
    /// The preview asset loader reported in.
    PreviewLoaded(Result<u64, PreviewError>),
    /// The exit animation finished; the overlay leaves the screen.
    PreviewCloseFinished,
    /// The simulated subscription request completed.
    SubscriptionCompleted(String),
    /// Periodic tick driving autoplay, toast expiry, and card reveals.
    Tick(Instant),
    KeyPressed(iced::keyboard::Key),
}

/// Runtime flags parsed by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang ua`.
    pub lang: Option<String>,
    /// Alternate settings file; integration tests point this at a temp dir.
    pub config_path: Option<PathBuf>,
}

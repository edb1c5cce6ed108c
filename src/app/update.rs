// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Timed effects (the language fade, the preview reveal and close, the
//! simulated subscription) are all one-shot `after` tasks that resolve into
//! plain messages, so tests can drive every sequence by feeding the
//! completion message directly.

use super::view::PAGE_SCROLL_ID;
use super::{App, Message, LANGUAGE_FADE};
use crate::config::{self, Config};
use crate::error::PreviewError;
use crate::i18n::{strings, Locale};
use crate::link;
use crate::tracking;
use crate::ui::banner;
use crate::ui::navbar;
use crate::ui::newsletter;
use crate::ui::notifications::Notification;
use crate::ui::preview;
use crate::ui::storefront;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => match navbar::update(msg, &mut self.menu_open) {
                navbar::Event::None => Task::none(),
                navbar::Event::SwitchLanguage(locale) => self.switch_language(locale),
                navbar::Event::ScrollTo(section) => operation::snap_to(
                    Id::new(PAGE_SCROLL_ID),
                    RelativeOffset {
                        x: 0.0,
                        y: section.scroll_offset(),
                    },
                ),
            },
            Message::Banner(msg) => {
                banner::update(&mut self.banner, msg, Instant::now());
                Task::none()
            }
            Message::Storefront(msg) => {
                match storefront::update(&mut self.storefront, msg, Instant::now()) {
                    storefront::Event::None => Task::none(),
                    storefront::Event::OpenPreview(index) => self.open_preview(index),
                    storefront::Event::Purchase(index) => self.purchase(index),
                }
            }
            Message::Newsletter(msg) => match newsletter::update(&mut self.newsletter, msg) {
                newsletter::Event::None => Task::none(),
                newsletter::Event::Subscribe(email) => after(
                    newsletter::SUBSCRIBE_DELAY,
                    Message::SubscriptionCompleted(email),
                ),
                newsletter::Event::Invalid => {
                    self.notifications
                        .push(Notification::error(strings::NEWSLETTER_INVALID_EMAIL));
                    Task::none()
                }
            },
            Message::SubscriptionCompleted(email) => {
                tracking::newsletter_subscription(&email, self.locale);
                self.newsletter.complete();
                self.notifications
                    .push(Notification::success(strings::NEWSLETTER_SUBSCRIBED));
                Task::none()
            }
            Message::Preview(preview::Message::CloseRequested) => self.close_preview(),
            // Swallowed so clicks inside the modal never reach the backdrop.
            Message::Preview(preview::Message::ContentClicked) => Task::none(),
            Message::PreviewRevealed => {
                self.preview.reveal();
                Task::none()
            }
            Message::PreviewLoaded(result) => {
                match result {
                    Ok(bytes) => self.preview.load_succeeded(bytes),
                    Err(error) => {
                        tracing::warn!(
                            path = ?self.preview.asset_path(),
                            %error,
                            "preview asset failed to load"
                        );
                        self.preview.load_failed(&error);
                    }
                }
                Task::none()
            }
            Message::PreviewCloseFinished => {
                self.preview.finish_close();
                Task::none()
            }
            Message::LocaleApplied(locale) => {
                self.locale = locale;
                self.pending_locale = None;
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::Tick(now) => {
                self.tick(now);
                Task::none()
            }
            Message::KeyPressed(key) => self.handle_key(&key),
        }
    }

    fn tick(&mut self, now: Instant) {
        self.banner.tick(now);
        self.notifications.tick();
        let visible = self.storefront.visible_indices(&self.catalog).len();
        self.storefront.tick(now, visible);
    }

    /// Starts a language switch: the target locale is recorded, the
    /// preference persisted, and the fade timer scheduled. A switch already
    /// in flight wins over a new request.
    fn switch_language(&mut self, locale: Locale) -> Task<Message> {
        if locale == self.locale || self.pending_locale.is_some() {
            return Task::none();
        }
        self.pending_locale = Some(locale);
        tracking::language_switch(locale);
        self.persist_language(locale);
        after(LANGUAGE_FADE, Message::LocaleApplied(locale))
    }

    /// Persistence happens only on this user-facing path; locale resolution
    /// at startup never writes the file back.
    fn persist_language(&self, locale: Locale) {
        let config = Config {
            language: Some(locale.as_str().to_string()),
        };
        let saved = match &self.config_path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
        if let Err(err) = saved {
            tracing::warn!(%err, "failed to persist language preference");
        }
    }

    fn open_preview(&mut self, index: usize) -> Task<Message> {
        let Some(book) = self.catalog.get(index) else {
            return Task::none();
        };
        let path = self.preview.open(book, self.locale);
        // The reveal timer and the asset load run independently; a failure
        // may overtake the reveal at any point.
        Task::batch([
            after(preview::LOADING_REVEAL_DELAY, Message::PreviewRevealed),
            Task::perform(load_asset(path), Message::PreviewLoaded),
        ])
    }

    fn close_preview(&mut self) -> Task<Message> {
        if self.preview.begin_close() {
            after(preview::CLOSE_ANIMATION, Message::PreviewCloseFinished)
        } else {
            Task::none()
        }
    }

    fn purchase(&mut self, index: usize) -> Task<Message> {
        let Some(book) = self.catalog.get(index) else {
            return Task::none();
        };
        tracking::purchase_click(book.number(), self.locale);
        let url = book.store_link(self.locale);
        if let Err(err) = link::open_in_browser(&url) {
            tracing::warn!(%url, %err, "failed to hand the store link to the browser");
            self.notifications
                .push(Notification::error(strings::LINK_OPEN_FAILED));
        }
        Task::none()
    }

    fn handle_key(&mut self, key: &Key) -> Task<Message> {
        match key {
            Key::Named(Named::Escape) if self.preview.is_on_screen() => self.close_preview(),
            Key::Named(Named::ArrowLeft) if self.banner.is_hovered() => {
                self.banner.prev();
                Task::none()
            }
            Key::Named(Named::ArrowRight) if self.banner.is_hovered() => {
                self.banner.next();
                Task::none()
            }
            _ => Task::none(),
        }
    }
}

/// Schedules a message after a fixed delay.
fn after(delay: Duration, message: Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(delay), move |()| message.clone())
}

async fn load_asset(path: String) -> Result<u64, PreviewError> {
    match tokio::fs::metadata(&path).await {
        Ok(metadata) => Ok(metadata.len()),
        Err(err) => Err(PreviewError::from_io(&err)),
    }
}

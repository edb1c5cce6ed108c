// SPDX-License-Identifier: MPL-2.0
//! The book preview overlay.
//!
//! A session moves through `Closed -> Loading -> Open -> Closing -> Closed`.
//! The `Loading -> Open` transition is driven by a fixed timer, not by load
//! completion; the asset read resolves independently and may flip the
//! session to `Failed` at any point before closing. Page scroll is locked
//! for exactly as long as the overlay is on screen.

use crate::catalog::Book;
use crate::error::PreviewError;
use crate::i18n::{strings, Locale};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};
use std::time::Duration;

/// How long the loading indicator shows before the viewer is revealed,
/// regardless of whether the asset finished loading.
pub const LOADING_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Length of the exit animation before the session actually closes.
pub const CLOSE_ANIMATION: Duration = Duration::from_millis(200);

/// The preview session lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Closed,
    Loading {
        book_number: String,
        asset_path: String,
    },
    Open {
        book_number: String,
        asset_path: String,
        /// Asset size, once the loader has reported in.
        size_bytes: Option<u64>,
    },
    Failed {
        book_number: String,
        error: PreviewError,
    },
    Closing,
}

/// Messages emitted by the overlay's own controls.
#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
    /// Clicks on the inner content are swallowed so only the backdrop closes.
    ContentClicked,
}

#[derive(Debug)]
pub struct State {
    session: Session,
    scroll_locked: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: Session::Closed,
            scroll_locked: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Whether the overlay occupies the screen in any form.
    #[must_use]
    pub fn is_on_screen(&self) -> bool {
        !matches!(self.session, Session::Closed)
    }

    /// The currently loaded asset path, if any.
    #[must_use]
    pub fn asset_path(&self) -> Option<&str> {
        match &self.session {
            Session::Loading { asset_path, .. } | Session::Open { asset_path, .. } => {
                Some(asset_path)
            }
            _ => None,
        }
    }

    /// Opens the overlay for a book, locking page scroll. Returns the
    /// derived asset path for the loader task.
    pub fn open(&mut self, book: &Book, locale: Locale) -> String {
        let asset_path = book.preview_path(locale);
        self.session = Session::Loading {
            book_number: book.number().to_string(),
            asset_path: asset_path.clone(),
        };
        self.scroll_locked = true;
        asset_path
    }

    /// Fixed-timer transition from loading to open. A session that already
    /// failed or started closing stays where it is.
    pub fn reveal(&mut self) {
        if let Session::Loading {
            book_number,
            asset_path,
        } = &self.session
        {
            self.session = Session::Open {
                book_number: book_number.clone(),
                asset_path: asset_path.clone(),
                size_bytes: None,
            };
        }
    }

    /// The loader reported the asset's size.
    pub fn load_succeeded(&mut self, bytes: u64) {
        if let Session::Open { size_bytes, .. } = &mut self.session {
            *size_bytes = Some(bytes);
        }
    }

    /// The loader failed; the viewer is replaced by the error body.
    pub fn load_failed(&mut self, error: &PreviewError) {
        match &self.session {
            Session::Loading { book_number, .. } | Session::Open { book_number, .. } => {
                self.session = Session::Failed {
                    book_number: book_number.clone(),
                    error: error.clone(),
                };
            }
            _ => {}
        }
    }

    /// Starts the exit animation. Returns `false` when there is nothing to
    /// close (already closed or closing), so callers skip the timer.
    pub fn begin_close(&mut self) -> bool {
        match self.session {
            Session::Closed | Session::Closing => false,
            _ => {
                self.session = Session::Closing;
                true
            }
        }
    }

    /// Ends the exit animation: clears the asset path and unlocks scroll.
    pub fn finish_close(&mut self) {
        self.session = Session::Closed;
        self.scroll_locked = false;
    }
}

/// Renders the overlay. Must only be called while the session is on screen.
pub fn view(state: &State, locale: Locale) -> Element<'_, Message> {
    let inner: Element<'_, Message> = match state.session() {
        Session::Loading { .. } => loading_body(locale),
        Session::Open {
            book_number,
            asset_path,
            size_bytes,
        } => open_body(book_number, asset_path, *size_bytes),
        Session::Failed { error, .. } => failed_body(locale, error),
        // Briefly rendered during the exit animation.
        Session::Closing | Session::Closed => text("").into(),
    };

    let close_button = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(Message::CloseRequested)
        .style(styles::secondary_button);

    let header = Row::new()
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(text("")).width(Length::Fill))
        .push(close_button);

    let modal = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(inner),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .height(Length::Fixed(sizing::MODAL_HEIGHT))
    .padding(spacing::MD)
    .style(modal_style);

    // The inner content swallows clicks; only the backdrop around it closes.
    let content = mouse_area(modal).on_press(Message::ContentClicked);

    let backdrop = mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::CloseRequested);

    backdrop.into()
}

fn loading_body(locale: Locale) -> Element<'static, Message> {
    Container::new(
        Text::new(strings::PREVIEW_LOADING.get(locale)).size(typography::BODY),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn open_body<'a>(
    book_number: &'a str,
    asset_path: &'a str,
    size_bytes: Option<u64>,
) -> Element<'a, Message> {
    // Stand-in for an embedded document viewer: shows what is loaded.
    let label = match size_bytes {
        Some(bytes) => format!("book-{} · {} ({} KiB)", book_number, asset_path, bytes / 1024),
        None => format!("book-{} · {}", book_number, asset_path),
    };

    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(viewer_style)
        .into()
}

fn failed_body(locale: Locale, error: &PreviewError) -> Element<'static, Message> {
    let message = Text::new(error.user_text().get(locale)).size(typography::BODY);
    let close = button(text(strings::CLOSE_BUTTON.get(locale)).size(typography::BODY))
        .on_press(Message::CloseRequested)
        .style(styles::primary_button);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(message)
            .push(close),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn modal_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn viewer_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn third_book() -> Book {
        catalog().remove(2)
    }

    #[test]
    fn open_derives_locale_specific_path_and_locks_scroll() {
        let mut state = State::new();
        let path = state.open(&third_book(), Locale::Ua);

        assert_eq!(path, "assets/book-3-preview-ua.pdf");
        assert_eq!(state.asset_path(), Some("assets/book-3-preview-ua.pdf"));
        assert!(state.scroll_locked());
        assert!(matches!(state.session(), Session::Loading { .. }));
    }

    #[test]
    fn reveal_moves_loading_to_open() {
        let mut state = State::new();
        state.open(&third_book(), Locale::En);
        state.reveal();

        assert!(matches!(state.session(), Session::Open { .. }));
        assert_eq!(state.asset_path(), Some("assets/book-3-preview-en.pdf"));
    }

    #[test]
    fn reveal_is_a_no_op_after_failure() {
        let mut state = State::new();
        state.open(&third_book(), Locale::En);
        state.load_failed(&PreviewError::Missing);
        state.reveal();

        assert!(matches!(state.session(), Session::Failed { .. }));
    }

    #[test]
    fn load_failure_replaces_the_viewer() {
        let mut state = State::new();
        state.open(&third_book(), Locale::En);
        state.reveal();
        state.load_failed(&PreviewError::Missing);

        assert!(matches!(state.session(), Session::Failed { .. }));
        assert!(state.asset_path().is_none());
        // Scroll stays locked until the overlay closes.
        assert!(state.scroll_locked());
    }

    #[test]
    fn close_cycle_clears_path_and_restores_scroll() {
        let mut state = State::new();
        let locked_before = state.scroll_locked();

        state.open(&third_book(), Locale::Ua);
        state.reveal();
        assert!(state.begin_close());
        assert!(matches!(state.session(), Session::Closing));
        state.finish_close();

        assert!(matches!(state.session(), Session::Closed));
        assert!(state.asset_path().is_none());
        assert_eq!(state.scroll_locked(), locked_before);
    }

    #[test]
    fn begin_close_on_closed_session_is_rejected() {
        let mut state = State::new();
        assert!(!state.begin_close());

        state.open(&third_book(), Locale::En);
        assert!(state.begin_close());
        // Already closing: a second request must not restart the timer.
        assert!(!state.begin_close());
    }

    #[test]
    fn load_success_records_size_once_open() {
        let mut state = State::new();
        state.open(&third_book(), Locale::En);
        state.reveal();
        state.load_succeeded(2048);

        match state.session() {
            Session::Open { size_bytes, .. } => assert_eq!(*size_bytes, Some(2048)),
            other => panic!("expected open session, got {:?}", other),
        }
    }

    #[test]
    fn view_renders_every_on_screen_session() {
        let mut state = State::new();
        state.open(&third_book(), Locale::Ua);
        let _ = view(&state, Locale::Ua);

        state.reveal();
        let _ = view(&state, Locale::Ua);

        state.load_failed(&PreviewError::Missing);
        let _ = view(&state, Locale::En);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The book grid: filter tabs, cards, and the preview/buy actions.
//!
//! Visibility is a pure function of the card's category and the selected
//! filter; cards that fail it are removed from the layout entirely.
//! Admitted cards fade in one after another (a staggered reveal) whenever
//! the filter changes.

use crate::catalog::{Book, CategoryFilter};
use crate::i18n::{strings, Locale};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Delay between consecutive card reveals.
pub const REVEAL_STAGGER: Duration = Duration::from_millis(100);

/// Messages emitted by the storefront.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(CategoryFilter),
    PreviewRequested(usize),
    PurchaseRequested(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenPreview(usize),
    Purchase(usize),
}

#[derive(Debug)]
pub struct State {
    filter: CategoryFilter,
    /// How many admitted cards are fully revealed so far.
    revealed: usize,
    /// Timestamp of the last reveal step; `None` once the stagger is done.
    last_reveal: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            filter: CategoryFilter::default(),
            revealed: 0,
            last_reveal: Some(now),
        }
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Indices of catalog books admitted by the current filter, in order.
    #[must_use]
    pub fn visible_indices(&self, books: &[Book]) -> Vec<usize> {
        books
            .iter()
            .enumerate()
            .filter(|(_, book)| self.filter.admits(book.category))
            .map(|(index, _)| index)
            .collect()
    }

    /// Whether the staggered reveal is still in progress.
    #[must_use]
    pub fn revealing(&self) -> bool {
        self.last_reveal.is_some()
    }

    /// Advances the reveal one card at a time. Returns whether anything
    /// changed.
    pub fn tick(&mut self, now: Instant, visible_count: usize) -> bool {
        let Some(last) = self.last_reveal else {
            return false;
        };
        if self.revealed >= visible_count {
            self.last_reveal = None;
            return false;
        }
        if now.duration_since(last) >= REVEAL_STAGGER {
            self.revealed += 1;
            self.last_reveal = if self.revealed >= visible_count {
                None
            } else {
                Some(now)
            };
            return true;
        }
        false
    }

    fn select_filter(&mut self, filter: CategoryFilter, now: Instant) {
        self.filter = filter;
        self.revealed = 0;
        self.last_reveal = Some(now);
    }
}

/// Processes a storefront message and returns the event for the parent.
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            state.select_filter(filter, now);
            Event::None
        }
        Message::PreviewRequested(index) => Event::OpenPreview(index),
        Message::PurchaseRequested(index) => Event::Purchase(index),
    }
}

/// Renders the filter tabs and the card grid.
pub fn view<'a>(
    state: &'a State,
    books: &'a [Book],
    locale: Locale,
    fading: bool,
) -> Element<'a, Message> {
    let heading = Text::new(strings::SECTION_POPULAR.get(locale))
        .size(typography::TITLE_MD)
        .style(styles::body_text(fading));

    let tabs = tab_row(state, locale, fading);

    let visible = state.visible_indices(books);
    let mut grid = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    for (position, index) in visible.iter().enumerate() {
        let revealed = position < state.revealed || !state.revealing();
        row = row.push(card(*index, &books[*index], locale, fading, revealed));
        if position % 3 == 2 {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::MD);
        }
    }
    grid = grid.push(row);

    Column::new()
        .spacing(spacing::LG)
        .push(heading)
        .push(tabs)
        .push(grid)
        .into()
}

fn tab_row(state: &State, locale: Locale, fading: bool) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for filter in CategoryFilter::TABS {
        let active = filter == state.filter();
        let label = Text::new(filter.label().get(locale))
            .size(typography::BODY)
            .style(styles::body_text(fading));
        let mut tab = button(label)
            .padding([spacing::XXS, spacing::MD])
            .style(styles::tab_button(active));
        // The active tab is not pressable; selecting it again is a no-op.
        if !active {
            tab = tab.on_press(Message::FilterSelected(filter));
        }
        row = row.push(tab);
    }

    row.into()
}

fn card<'a>(
    index: usize,
    book: &'a Book,
    locale: Locale,
    fading: bool,
    revealed: bool,
) -> Element<'a, Message> {
    let cover = Container::new(
        Text::new(format!("book-{}", book.number())).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::COVER_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::COVER_HEIGHT))
    .style(cover_style);

    let title = Text::new(book.title.get(locale))
        .size(typography::TITLE_SM)
        .style(styles::body_text(fading));
    let tagline = Text::new(book.tagline.get(locale))
        .size(typography::CAPTION)
        .style(styles::body_text(fading));
    let badge = Container::new(
        Text::new(book.category.label().get(locale)).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(badge_style);

    let preview_button = button(text(strings::PREVIEW_BUTTON.get(locale)).size(typography::BODY))
        .on_press(Message::PreviewRequested(index))
        .style(styles::secondary_button);
    let buy_button = button(text(strings::BUY_BUTTON.get(locale)).size(typography::BODY))
        .on_press(Message::PurchaseRequested(index))
        .style(styles::primary_button);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(preview_button)
        .push(buy_button);

    let body = Column::new()
        .spacing(spacing::XS)
        .push(cover)
        .push(title)
        .push(tagline)
        .push(badge)
        .push(actions);

    let card = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| {
            let mut style = styles::card(theme);
            if !revealed {
                // Mid-reveal cards hold a transparent placeholder slot so
                // the grid does not reflow as they fade in.
                style.background = style.background.map(|background| match background {
                    Background::Color(color) => Background::Color(Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..color
                    }),
                    other => other,
                });
            }
            style
        });

    card.into()
}

fn cover_style(_theme: &Theme) -> container::Style {
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

fn badge_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_400)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, Category};

    #[test]
    fn default_filter_shows_every_book() {
        let books = catalog();
        let state = State::new(Instant::now());
        assert_eq!(state.visible_indices(&books).len(), books.len());
    }

    #[test]
    fn category_filter_hides_other_categories() {
        let books = catalog();
        let mut state = State::new(Instant::now());
        let now = Instant::now();

        update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Poetry)),
            now,
        );

        let visible = state.visible_indices(&books);
        assert!(!visible.is_empty());
        for index in &visible {
            assert_eq!(books[*index].category, Category::Poetry);
        }
        for (index, book) in books.iter().enumerate() {
            assert_eq!(
                visible.contains(&index),
                CategoryFilter::Only(Category::Poetry).admits(book.category)
            );
        }
    }

    #[test]
    fn selecting_a_filter_restarts_the_reveal() {
        let mut state = State::new(Instant::now());
        let now = Instant::now();

        // Let the initial reveal finish.
        let mut t = now;
        for _ in 0..20 {
            t += REVEAL_STAGGER;
            state.tick(t, 6);
        }
        assert!(!state.revealing());

        update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Adventure)),
            t,
        );
        assert!(state.revealing());
        assert_eq!(state.revealed, 0);
    }

    #[test]
    fn reveal_advances_one_card_per_stagger_step() {
        let now = Instant::now();
        let mut state = State::new(now);

        assert!(!state.tick(now + REVEAL_STAGGER / 2, 3));
        assert_eq!(state.revealed, 0);

        assert!(state.tick(now + REVEAL_STAGGER, 3));
        assert_eq!(state.revealed, 1);

        assert!(state.tick(now + REVEAL_STAGGER * 2, 3));
        assert!(state.tick(now + REVEAL_STAGGER * 3, 3));
        assert_eq!(state.revealed, 3);
        assert!(!state.revealing());
    }

    #[test]
    fn preview_and_purchase_propagate_events() {
        let mut state = State::new(Instant::now());
        let now = Instant::now();

        assert!(matches!(
            update(&mut state, Message::PreviewRequested(2), now),
            Event::OpenPreview(2)
        ));
        assert!(matches!(
            update(&mut state, Message::PurchaseRequested(4), now),
            Event::Purchase(4)
        ));
    }

    #[test]
    fn view_renders_under_every_filter() {
        let books = catalog();
        let mut state = State::new(Instant::now());
        for filter in CategoryFilter::TABS {
            state.select_filter(filter, Instant::now());
            for locale in Locale::ALL {
                let _element = view(&state, &books, locale, false);
            }
        }
    }
}

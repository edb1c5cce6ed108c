// SPDX-License-Identifier: MPL-2.0
//! Auto-rotating promotional banner with manual controls and indicator dots.
//!
//! The slider is a circular index over a fixed slide list. Autoplay is a
//! single deadline re-armed after every automatic advance; suspending and
//! re-arming that one field is what makes duplicate timers unrepresentable.

use crate::i18n::{Locale, LocaleText};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, mouse_area, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// Interval between automatic slide advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// One rotating banner panel.
#[derive(Debug, Clone)]
pub struct Slide {
    pub headline: LocaleText,
    pub subline: LocaleText,
}

/// The promotional slides, in rotation order.
#[must_use]
pub fn slides() -> Vec<Slide> {
    vec![
        Slide {
            headline: LocaleText::new("New release: Pocket Songs", "Новинка: Кишенькові пісні"),
            subline: LocaleText::new(
                "Tiny poems, now in both languages.",
                "Маленькі вірші, тепер обома мовами.",
            ),
        },
        Slide {
            headline: LocaleText::new("Free previews for every book", "Безкоштовний перегляд кожної книги"),
            subline: LocaleText::new(
                "Read the first chapter before you buy.",
                "Прочитайте перший розділ перед покупкою.",
            ),
        },
        Slide {
            headline: LocaleText::new("Join the newsletter", "Приєднуйтесь до розсилки"),
            subline: LocaleText::new(
                "New stories land in your inbox first.",
                "Нові історії спершу у вашій скриньці.",
            ),
        },
    ]
}

/// Messages emitted by the banner.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Prev,
    GoTo(usize),
    HoverEntered,
    HoverExited,
}

/// Slider state. With zero slides the component is inert: no deadline is
/// ever armed and `view` renders nothing.
#[derive(Debug)]
pub struct State {
    slides: Vec<Slide>,
    current: usize,
    hovered: bool,
    /// When the next automatic advance fires; `None` while suspended.
    next_advance: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        let next_advance = if slides.is_empty() {
            None
        } else {
            Some(Instant::now() + AUTOPLAY_INTERVAL)
        };
        Self {
            slides,
            current: 0,
            hovered: false,
            next_advance,
        }
    }

    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the shared tick needs to keep running for this component.
    #[must_use]
    pub fn autoplay_armed(&self) -> bool {
        self.next_advance.is_some() && !self.hovered
    }

    pub fn next(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
    }

    pub fn prev(&mut self) {
        if self.slides.is_empty() {
            return;
        }
        self.current = (self.current + self.slides.len() - 1) % self.slides.len();
    }

    /// Jumps to a slide. Indicator clicks can only produce valid indices;
    /// anything else is a caller bug.
    pub fn goto(&mut self, index: usize) {
        debug_assert!(index < self.slides.len(), "slide index out of range");
        if index < self.slides.len() {
            self.current = index;
        }
    }

    fn rearm(&mut self, now: Instant) {
        if !self.slides.is_empty() {
            self.next_advance = Some(now + AUTOPLAY_INTERVAL);
        }
    }

    /// Advances automatically when the deadline has passed. Returns whether
    /// a transition happened (so callers can redraw).
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hovered {
            return false;
        }
        match self.next_advance {
            Some(deadline) if now >= deadline => {
                self.next();
                self.rearm(now);
                true
            }
            _ => false,
        }
    }
}

/// Processes a banner message. Jump navigation re-arms the autoplay
/// deadline so manual and automatic advancement never race within one
/// interval; next/prev leave the running interval untouched.
pub fn update(state: &mut State, message: Message, now: Instant) {
    match message {
        Message::Next => state.next(),
        Message::Prev => state.prev(),
        Message::GoTo(index) => {
            state.goto(index);
            state.rearm(now);
        }
        Message::HoverEntered => {
            state.hovered = true;
        }
        Message::HoverExited => {
            state.hovered = false;
            state.rearm(now);
        }
    }
}

/// Renders the banner; nothing at all when there are no slides.
pub fn view(state: &State, locale: Locale, fading: bool) -> Element<'_, Message> {
    if state.is_inert() {
        return Column::new().into();
    }

    let slide = &state.slides[state.current];

    let headline = Text::new(slide.headline.get(locale))
        .size(typography::TITLE_LG)
        .style(styles::body_text(fading));
    let subline = Text::new(slide.subline.get(locale))
        .size(typography::BODY)
        .style(styles::body_text(fading));

    let slide_body = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(headline)
        .push(subline);

    let prev_control = control_button("‹", Message::Prev);
    let next_control = control_button("›", Message::Next);

    let slide_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .spacing(spacing::LG)
        .push(prev_control)
        .push(Container::new(slide_body).width(Length::Fill).center_x(Length::Fill))
        .push(next_control);

    let indicators = indicator_row(state);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(slide_row)
        .push(indicators);

    let banner = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BANNER_HEIGHT))
        .padding(spacing::LG)
        .center_y(Length::Fixed(sizing::BANNER_HEIGHT))
        .style(banner_style);

    mouse_area(banner)
        .on_enter(Message::HoverEntered)
        .on_exit(Message::HoverExited)
        .into()
}

fn control_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::TITLE_MD))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::secondary_button)
        .into()
}

fn indicator_row(state: &State) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);

    for index in 0..state.slide_count() {
        let active = index == state.current();
        let dot = button(Text::new(""))
            .width(Length::Fixed(sizing::INDICATOR))
            .height(Length::Fixed(sizing::INDICATOR))
            .on_press(Message::GoTo(index))
            .style(move |_theme: &Theme, _status| button::Style {
                background: Some(Background::Color(if active {
                    palette::WHITE
                } else {
                    iced::Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::WHITE
                    }
                })),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            });
        row = row.push(dot);
    }

    row.into()
}

fn banner_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(count: usize) -> State {
        let slide = Slide {
            headline: LocaleText::new("h", "з"),
            subline: LocaleText::new("s", "п"),
        };
        State::new(vec![slide; count])
    }

    #[test]
    fn empty_slider_is_inert() {
        let mut state = state_with(0);
        assert!(state.is_inert());
        assert!(!state.autoplay_armed());

        state.next();
        state.prev();
        assert_eq!(state.current(), 0);
        assert!(!state.tick(Instant::now() + AUTOPLAY_INTERVAL));
    }

    #[test]
    fn next_and_prev_are_inverse() {
        for count in 1..=5 {
            let mut state = state_with(count);
            state.goto(count / 2);
            let start = state.current();
            state.next();
            state.prev();
            assert_eq!(state.current(), start);
        }
    }

    #[test]
    fn n_nexts_return_to_origin() {
        for count in 1..=5 {
            let mut state = state_with(count);
            for _ in 0..count {
                state.next();
            }
            assert_eq!(state.current(), 0);
        }
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut state = state_with(3);
        state.prev();
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn current_always_stays_in_range() {
        let mut state = state_with(3);
        for _ in 0..10 {
            state.next();
            assert!(state.current() < state.slide_count());
        }
    }

    #[test]
    fn hover_suspends_autoplay_and_leave_rearms() {
        let mut state = state_with(3);
        let now = Instant::now();

        update(&mut state, Message::HoverEntered, now);
        assert!(!state.autoplay_armed());
        assert!(!state.tick(now + AUTOPLAY_INTERVAL * 2));
        assert_eq!(state.current(), 0);

        update(&mut state, Message::HoverExited, now);
        assert!(state.autoplay_armed());
    }

    #[test]
    fn tick_advances_after_the_interval_and_rearms() {
        let mut state = state_with(3);
        let now = Instant::now();
        state.rearm(now);

        assert!(!state.tick(now + AUTOPLAY_INTERVAL / 2));
        assert_eq!(state.current(), 0);

        assert!(state.tick(now + AUTOPLAY_INTERVAL));
        assert_eq!(state.current(), 1);

        // Freshly re-armed: the next advance needs a full interval again.
        assert!(!state.tick(now + AUTOPLAY_INTERVAL + AUTOPLAY_INTERVAL / 2));
        assert!(state.tick(now + AUTOPLAY_INTERVAL * 2));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn goto_resets_the_autoplay_interval() {
        let mut state = state_with(3);
        let start = Instant::now();
        state.rearm(start);

        let almost = start + AUTOPLAY_INTERVAL - Duration::from_millis(1);
        update(&mut state, Message::GoTo(2), almost);
        assert_eq!(state.current(), 2);

        // The old deadline has been replaced; no advance until a full
        // interval after the manual jump.
        assert!(!state.tick(start + AUTOPLAY_INTERVAL));
        assert!(state.tick(almost + AUTOPLAY_INTERVAL));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn manual_next_does_not_reset_the_interval() {
        let mut state = state_with(3);
        let start = Instant::now();
        state.rearm(start);

        update(&mut state, Message::Next, start + Duration::from_millis(100));
        assert_eq!(state.current(), 1);

        // Autoplay still fires at the original deadline.
        assert!(state.tick(start + AUTOPLAY_INTERVAL));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn view_renders_for_both_locales() {
        let state = state_with(3);
        for locale in Locale::ALL {
            let _element = view(&state, locale, false);
        }
    }
}

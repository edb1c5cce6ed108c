// SPDX-License-Identifier: MPL-2.0
//! Newsletter signup form.
//!
//! Submission is simulated: a valid email disables the submit control,
//! swaps its label for the locale's "in progress" text, waits a fixed
//! delay, then reports success and resets. An integrator wiring in a real
//! backend must preserve that same user-visible sequence.

use crate::i18n::{strings, Locale};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, text_input, Column, Row, Text};
use iced::{Element, Length};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// Simulated network latency for the subscription request.
pub const SUBSCRIBE_DELAY: Duration = Duration::from_millis(1500);

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

/// Whether the (already trimmed) input is an acceptable email address.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A valid submission started; the parent schedules the simulated
    /// request and eventually calls [`State::complete`].
    Subscribe(String),
    /// The input failed validation; the parent reports it.
    Invalid,
}

#[derive(Debug, Default)]
pub struct State {
    email: String,
    submitting: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Resets the form after a completed subscription: clears the input
    /// and restores the submit control.
    pub fn complete(&mut self) {
        self.email.clear();
        self.submitting = false;
    }
}

/// Processes a form message and returns the event for the parent.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        Message::Submit => {
            if state.submitting {
                return Event::None;
            }
            let email = state.email.trim().to_string();
            if validate_email(&email) {
                state.submitting = true;
                Event::Subscribe(email)
            } else {
                // The input is retained so the user can correct it.
                Event::Invalid
            }
        }
    }
}

/// Renders the signup form. The placeholder follows the target locale
/// immediately, without the text transition.
pub fn view(
    state: &State,
    locale: Locale,
    placeholder_locale: Locale,
    fading: bool,
) -> Element<'_, Message> {
    let heading = Text::new(strings::NEWSLETTER_HEADING.get(locale))
        .size(typography::TITLE_MD)
        .style(styles::body_text(fading));

    let input = text_input(
        strings::NEWSLETTER_PLACEHOLDER.get(placeholder_locale),
        state.email(),
    )
    .on_input(Message::EmailChanged)
    .on_submit(Message::Submit)
    .width(Length::Fixed(sizing::INPUT_WIDTH))
    .padding(spacing::XS);

    let label = if state.is_submitting() {
        strings::NEWSLETTER_SUBSCRIBING.get(locale)
    } else {
        strings::NEWSLETTER_SUBSCRIBE.get(locale)
    };
    let mut submit = iced::widget::button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::primary_button);
    if !state.is_submitting() {
        submit = submit.on_press(Message::Submit);
    }

    let form = Row::new().spacing(spacing::XS).push(input).push(submit);

    Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(form)
        .into()
}

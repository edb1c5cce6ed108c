// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared across components.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Theme};

/// Body text style; dimmed while a language transition is in flight.
pub fn body_text(fading: bool) -> impl Fn(&Theme) -> text::Style {
    move |theme: &Theme| {
        let base = theme.palette().text;
        let color = if fading {
            Color {
                a: opacity::TEXT_FADE,
                ..base
            }
        } else {
            base
        };
        text::Style { color: Some(color) }
    }
}

/// Primary action button (buy, subscribe). The pressed state darkens,
/// providing the press feedback beat.
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        _ => palette::PRIMARY_500,
    };

    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            text_color: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::WHITE
            },
            border: rounded_border(),
            ..Default::default()
        },
        _ => button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: rounded_border(),
            shadow: shadow::SM,
            ..Default::default()
        },
    }
}

/// Secondary button (preview, close).
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => extended.background.strong.color,
        button::Status::Pressed => palette::GRAY_400,
        _ => extended.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: extended.background.base.text,
        border: rounded_border(),
        ..Default::default()
    }
}

/// Pill-shaped tab or language button; `selected` marks the active one.
pub fn tab_button(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let extended = theme.extended_palette();
        let (background, text_color) = if selected {
            (palette::PRIMARY_500, palette::WHITE)
        } else {
            match status {
                button::Status::Hovered => (extended.background.strong.color, extended.background.base.text),
                _ => (extended.background.weak.color, extended.background.base.text),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Card container for books and form panels.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed backdrop behind the preview overlay.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

fn rounded_border() -> Border {
    Border {
        radius: radius::SM.into(),
        ..Default::default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::i18n::Locale;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, locale: Locale) -> Element<'a, Message> {
        let accent_color = notification.severity().color();
        let fading = notification.phase() == Phase::Fading;

        let message_widget = Text::new(notification.text().get(locale))
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(alpha_for(theme.palette().text, fading)),
            });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(|theme: &Theme, _status| button::Style {
                background: None,
                text_color: theme.palette().text,
                ..Default::default()
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color, fading))
            .into()
    }

    /// Renders the toast overlay with all visible notifications,
    /// stacked in the top-right corner.
    pub fn view_overlay(manager: &Manager, locale: Locale) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, locale))
            .collect();

        if toasts.is_empty() {
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn alpha_for(color: Color, fading: bool) -> Color {
    if fading {
        Color {
            a: opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color, fading: bool) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(alpha_for(bg_color, fading))),
        border: iced::Border {
            color: alpha_for(accent_color, fading),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if fading { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Light;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent, false);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn fading_toast_dims_its_accent() {
        let theme = Theme::Light;
        let accent = palette::ERROR_500;
        let style = toast_container_style(&theme, accent, true);

        assert!(style.border.color.a < accent.a);
    }

    #[test]
    fn overlay_renders_for_each_locale() {
        let mut manager = Manager::new();
        manager.push(Notification::success(strings::NEWSLETTER_SUBSCRIBED));
        for locale in Locale::ALL {
            let _element = Toast::view_overlay(&manager, locale);
        }
    }
}

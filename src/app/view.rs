// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections; the preview overlay and
//! the toast stack sit above it in a `Stack` when present.

use super::{App, Message};
use crate::i18n::{strings, Locale};
use crate::ui::banner;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar;
use crate::ui::newsletter;
use crate::ui::notifications::Toast;
use crate::ui::preview;
use crate::ui::storefront;
use crate::ui::styles;
use iced::widget::{mouse_area, Column, Id, Scrollable, Stack, Text};
use iced::{Element, Length};

/// Id of the page scrollable, targeted by section navigation.
pub const PAGE_SCROLL_ID: &str = "page";

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let fading = self.pending_locale.is_some();
        // Input placeholders follow the target locale without the fade.
        let placeholder_locale = self.pending_locale.unwrap_or(self.locale);

        let navbar = navbar::view(navbar::ViewContext {
            locale: self.locale,
            menu_open: self.menu_open,
            fading,
        })
        .map(Message::Navbar);

        let banner = banner::view(&self.banner, self.locale, fading).map(Message::Banner);
        let storefront = storefront::view(&self.storefront, &self.catalog, self.locale, fading)
            .map(Message::Storefront);
        let about = about_section(self.locale, fading);
        let newsletter =
            newsletter::view(&self.newsletter, self.locale, placeholder_locale, fading)
                .map(Message::Newsletter);

        let sections = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::LG)
            .push(banner)
            .push(storefront)
            .push(about)
            .push(newsletter);

        // Clicks on the page body close the open section menu.
        let body: Element<'_, Message> = if self.menu_open {
            mouse_area(sections)
                .on_press(Message::Navbar(navbar::Message::CloseMenu))
                .into()
        } else {
            sections.into()
        };

        let page = Column::new().push(navbar).push(
            Scrollable::new(body)
                .id(Id::new(PAGE_SCROLL_ID))
                .width(Length::Fill)
                .height(Length::Fill),
        );

        let mut layers = Stack::new().push(page);
        if self.preview.is_on_screen() {
            layers = layers.push(preview::view(&self.preview, self.locale).map(Message::Preview));
        }
        if self.notifications.visible_count() > 0 {
            layers = layers.push(
                Toast::view_overlay(&self.notifications, self.locale).map(Message::Notification),
            );
        }
        layers.into()
    }
}

fn about_section<'a>(locale: Locale, fading: bool) -> Element<'a, Message> {
    let heading = Text::new(strings::ABOUT_HEADING.get(locale))
        .size(typography::TITLE_MD)
        .style(styles::body_text(fading));
    let body = Text::new(strings::ABOUT_BODY.get(locale))
        .size(typography::BODY)
        .style(styles::body_text(fading));

    Column::new()
        .spacing(spacing::SM)
        .push(heading)
        .push(body)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Header bar: brand title, language switcher, and a collapsible section
//! menu (the small-viewport navigation counterpart).
//!
//! The menu closes whenever an item is chosen; clicks elsewhere in the
//! window also close it, which the parent wires up.

use crate::i18n::{strings, Locale, LocaleText};
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// A navigable page section; scrolling targets are relative offsets into
/// the main scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Books,
    About,
    Newsletter,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Books, Section::About, Section::Newsletter];

    #[must_use]
    pub fn label(self) -> LocaleText {
        match self {
            Section::Books => strings::NAV_BOOKS,
            Section::About => strings::NAV_ABOUT,
            Section::Newsletter => strings::NAV_NEWSLETTER,
        }
    }

    /// Vertical position of the section within the page, 0.0 = top.
    #[must_use]
    pub fn scroll_offset(self) -> f32 {
        match self {
            Section::Books => 0.25,
            Section::About => 0.7,
            Section::Newsletter => 1.0,
        }
    }
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    LanguageSelected(Locale),
    SectionSelected(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    SwitchLanguage(Locale),
    ScrollTo(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::LanguageSelected(locale) => {
            *menu_open = false;
            Event::SwitchLanguage(locale)
        }
        Message::SectionSelected(section) => {
            *menu_open = false;
            Event::ScrollTo(section)
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub locale: Locale,
    pub menu_open: bool,
    pub fading: bool,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let brand = Text::new(strings::WINDOW_TITLE.get(ctx.locale))
        .size(typography::TITLE_MD)
        .style(styles::body_text(ctx.fading));

    let mut language_row = Row::new().spacing(spacing::XXS);
    for locale in Locale::ALL {
        let active = locale == ctx.locale;
        let mut lang_button = button(Text::new(locale.button_label()).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::tab_button(active));
        // The active language is not pressable: switching to the current
        // locale is guarded here, at the control, not in the switcher.
        if !active {
            lang_button = lang_button.on_press(Message::LanguageSelected(locale));
        }
        language_row = language_row.push(lang_button);
    }

    let menu_button = button(Text::new("☰").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XXS)
        .style(styles::secondary_button);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(menu_button)
        .push(Container::new(brand).width(Length::Fill))
        .push(language_row);

    Container::new(row).width(Length::Fill).into()
}

fn build_dropdown<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS);

    for section in Section::ALL {
        let label = Text::new(section.label().get(ctx.locale))
            .size(typography::BODY)
            .style(styles::body_text(ctx.fading));
        let item = button(label)
            .on_press(Message::SectionSelected(section))
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::secondary_button);
        menu_column = menu_column.push(item);
    }

    Container::new(menu_column)
        .padding(spacing::XS)
        .width(Length::Fixed(200.0))
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::SM.into(),
                width: 1.0,
                color: theme.extended_palette().background.strong.color,
            },
            ..Default::default()
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Locale handling for the bilingual UI.
//!
//! The application supports exactly two locales. There is no message
//! catalog: every translatable item carries one value per locale, so a
//! missing translation is unrepresentable and lookups are total.

use crate::config::Config;
use std::fmt;
use std::str::FromStr;

/// One of the two supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ua,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ua];

    /// Short code used in asset paths, store links, and the config file.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ua => "ua",
        }
    }

    /// BCP-47 tag declared to the host environment. Ukrainian's registered
    /// tag is `uk`, which differs from the short code used in asset paths.
    #[must_use]
    pub fn document_tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ua => "uk",
        }
    }

    /// Label shown on the language switcher button.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ua => "УКР",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "ua" => Ok(Locale::Ua),
            _ => Err(()),
        }
    }
}

/// Resolves the startup locale: CLI flag, then the persisted preference,
/// then English. Unrecognized values at either level are ignored rather
/// than reported; startup never writes the preference back.
#[must_use]
pub fn resolve_locale(cli_lang: Option<&str>, config: &Config) -> Locale {
    if let Some(lang) = cli_lang {
        if let Ok(locale) = lang.parse() {
            return locale;
        }
    }

    if let Some(lang) = &config.language {
        if let Ok(locale) = lang.parse() {
            return locale;
        }
    }

    Locale::default()
}

/// A piece of UI text with one value per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleText {
    pub en: &'static str,
    pub ua: &'static str,
}

impl LocaleText {
    pub const fn new(en: &'static str, ua: &'static str) -> Self {
        Self { en, ua }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ua => self.ua,
        }
    }
}

/// Fixed UI strings that are not part of the catalog data.
pub mod strings {
    use super::LocaleText;

    pub const WINDOW_TITLE: LocaleText =
        LocaleText::new("Nadia's Bookstand", "Книжкова полиця Наді");

    pub const NAV_BOOKS: LocaleText = LocaleText::new("Books", "Книги");
    pub const NAV_ABOUT: LocaleText = LocaleText::new("About", "Про автора");
    pub const NAV_NEWSLETTER: LocaleText = LocaleText::new("Newsletter", "Розсилка");

    pub const SECTION_POPULAR: LocaleText =
        LocaleText::new("Popular books", "Популярні книги");
    pub const ABOUT_HEADING: LocaleText = LocaleText::new("About the author", "Про автора");
    pub const ABOUT_BODY: LocaleText = LocaleText::new(
        "Nadia writes warm, illustrated stories for curious children and \
         the grown-ups who read to them.",
        "Надя пише теплі ілюстровані історії для допитливих дітей та \
         дорослих, які їм читають.",
    );

    pub const PREVIEW_BUTTON: LocaleText = LocaleText::new("Preview", "Перегляд");
    pub const BUY_BUTTON: LocaleText = LocaleText::new("Buy on Amazon", "Купити на Amazon");
    pub const CLOSE_BUTTON: LocaleText = LocaleText::new("Close", "Закрити");

    pub const PREVIEW_LOADING: LocaleText =
        LocaleText::new("Loading preview…", "Завантаження перегляду…");
    pub const PREVIEW_UNAVAILABLE: LocaleText = LocaleText::new(
        "Sorry, the preview is not available at the moment.",
        "Вибачте, попередній перегляд наразі недоступний.",
    );

    pub const NEWSLETTER_HEADING: LocaleText =
        LocaleText::new("Stay in touch", "Залишайтеся на зв'язку");
    pub const NEWSLETTER_PLACEHOLDER: LocaleText =
        LocaleText::new("Your email address", "Ваша електронна адреса");
    pub const NEWSLETTER_SUBSCRIBE: LocaleText = LocaleText::new("Subscribe", "Підписатися");
    pub const NEWSLETTER_SUBSCRIBING: LocaleText =
        LocaleText::new("Subscribing…", "Підписуємося…");
    pub const NEWSLETTER_INVALID_EMAIL: LocaleText = LocaleText::new(
        "Please enter a valid email address.",
        "Будь ласка, введіть правильну електронну адресу.",
    );
    pub const NEWSLETTER_SUBSCRIBED: LocaleText =
        LocaleText::new("Thank you for subscribing!", "Дякуємо за підписку!");

    pub const LINK_OPEN_FAILED: LocaleText = LocaleText::new(
        "Could not open the store page.",
        "Не вдалося відкрити сторінку магазину.",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_round_trips_through_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.as_str().parse(), Ok(locale));
        }
    }

    #[test]
    fn unknown_locale_string_is_rejected() {
        assert!("fr".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn ukrainian_document_tag_is_uk() {
        assert_eq!(Locale::Ua.document_tag(), "uk");
        assert_eq!(Locale::En.document_tag(), "en");
    }

    #[test]
    fn locale_text_lookup_is_total() {
        let text = LocaleText::new("hello", "привіт");
        assert_eq!(text.get(Locale::En), "hello");
        assert_eq!(text.get(Locale::Ua), "привіт");
    }

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let config = Config {
            language: Some("en".to_string()),
        };
        assert_eq!(resolve_locale(Some("ua"), &config), Locale::Ua);
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            language: Some("ua".to_string()),
        };
        assert_eq!(resolve_locale(None, &config), Locale::Ua);
    }

    #[test]
    fn resolve_locale_defaults_to_english() {
        let config = Config::default();
        assert_eq!(resolve_locale(None, &config), Locale::En);
        assert_eq!(resolve_locale(Some("xx"), &config), Locale::En);
    }

    #[test]
    fn invalid_config_language_is_ignored() {
        let config = Config {
            language: Some("klingon".to_string()),
        };
        assert_eq!(resolve_locale(None, &config), Locale::En);
    }
}

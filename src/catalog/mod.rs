// SPDX-License-Identifier: MPL-2.0
//! The book catalog: card data, category filtering, and the derivation of
//! preview asset paths and outbound store links.
//!
//! Everything here is plain data and pure functions so the filtering and
//! link rules can be tested without a UI.

use crate::i18n::{Locale, LocaleText};
use regex::Regex;
use std::sync::OnceLock;

/// Marketplace used for derived purchase links.
const STORE_HOST: &str = "amazon.com";

/// Book number used when a cover path carries no recognizable identifier.
const FALLBACK_BOOK_NUMBER: &str = "1";

/// Category tag carried by every book card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Adventure,
    FairyTales,
    Poetry,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Adventure, Category::FairyTales, Category::Poetry];

    #[must_use]
    pub fn label(self) -> LocaleText {
        match self {
            Category::Adventure => LocaleText::new("Adventure", "Пригоди"),
            Category::FairyTales => LocaleText::new("Fairy tales", "Казки"),
            Category::Poetry => LocaleText::new("Poetry", "Поезія"),
        }
    }
}

/// The currently selected filter tab. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter tabs in display order.
    pub const TABS: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Adventure),
        CategoryFilter::Only(Category::FairyTales),
        CategoryFilter::Only(Category::Poetry),
    ];

    /// Whether a card with the given category is visible under this filter.
    /// Cards that fail this predicate are removed from the layout entirely.
    #[must_use]
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    #[must_use]
    pub fn label(self) -> LocaleText {
        match self {
            CategoryFilter::All => LocaleText::new("All", "Усі"),
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Per-locale purchase link override for one book.
#[derive(Debug, Clone, Copy)]
pub struct StoreOverride {
    pub locale: Locale,
    pub url: &'static str,
}

/// One catalog item. The book number embedded in `cover_path` identifies
/// the preview asset and the default store link.
#[derive(Debug, Clone)]
pub struct Book {
    pub title: LocaleText,
    pub tagline: LocaleText,
    pub cover_path: &'static str,
    pub category: Category,
    pub store_overrides: &'static [StoreOverride],
}

fn book_number_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"book-(\d+)").expect("book number pattern is valid"))
}

impl Book {
    /// Extracts the numeric book identifier from the cover path,
    /// falling back to `"1"` when the path carries none.
    #[must_use]
    pub fn number(&self) -> &str {
        book_number_pattern()
            .captures(self.cover_path)
            .and_then(|caps| caps.get(1))
            .map_or(FALLBACK_BOOK_NUMBER, |m| m.as_str())
    }

    /// Path of the locale-specific preview document. Integrators must
    /// provision these files alongside the application.
    #[must_use]
    pub fn preview_path(&self, locale: Locale) -> String {
        format!("assets/book-{}-preview-{}.pdf", self.number(), locale)
    }

    /// Outbound purchase link for the given locale. A per-locale override
    /// takes precedence over the derived marketplace link.
    #[must_use]
    pub fn store_link(&self, locale: Locale) -> String {
        if let Some(entry) = self
            .store_overrides
            .iter()
            .find(|entry| entry.locale == locale)
        {
            return entry.url.to_string();
        }

        format!("https://{}/book-{}-{}", STORE_HOST, self.number(), locale)
    }
}

/// The showcased books, in display order.
#[must_use]
pub fn catalog() -> Vec<Book> {
    vec![
        Book {
            title: LocaleText::new("The Fox Who Drew Maps", "Лисичка, що малювала мапи"),
            tagline: LocaleText::new(
                "A small fox charts a very big forest.",
                "Маленька лисичка досліджує дуже великий ліс.",
            ),
            cover_path: "assets/book-1-cover.jpg",
            category: Category::Adventure,
            store_overrides: &[],
        },
        Book {
            title: LocaleText::new("Three Winter Tales", "Три зимові казки"),
            tagline: LocaleText::new(
                "Stories for the longest nights of the year.",
                "Історії для найдовших ночей року.",
            ),
            cover_path: "assets/book-2-cover.jpg",
            category: Category::FairyTales,
            store_overrides: &[StoreOverride {
                locale: Locale::Ua,
                url: "https://amazon.de/dp/winter-tales-ua",
            }],
        },
        Book {
            title: LocaleText::new("Rhymes for Rainy Days", "Вірші для дощових днів"),
            tagline: LocaleText::new(
                "Poems to read aloud under a blanket.",
                "Вірші, які варто читати вголос під ковдрою.",
            ),
            cover_path: "assets/book-3-cover.jpg",
            category: Category::Poetry,
            store_overrides: &[],
        },
        Book {
            title: LocaleText::new("The Lighthouse Crew", "Команда маяка"),
            tagline: LocaleText::new(
                "Four friends keep the lamp burning.",
                "Четверо друзів підтримують вогонь маяка.",
            ),
            cover_path: "assets/book-4-cover.jpg",
            category: Category::Adventure,
            store_overrides: &[],
        },
        Book {
            title: LocaleText::new("Where the Dnipro Bends", "Там, де Дніпро повертає"),
            tagline: LocaleText::new(
                "Folk tales from the river's edge.",
                "Народні казки з берегів річки.",
            ),
            cover_path: "assets/book-5-cover.jpg",
            category: Category::FairyTales,
            store_overrides: &[
                StoreOverride {
                    locale: Locale::En,
                    url: "https://amazon.com/dp/dnipro-bends-en",
                },
                StoreOverride {
                    locale: Locale::Ua,
                    url: "https://amazon.de/dp/dnipro-bends-ua",
                },
            ],
        },
        Book {
            title: LocaleText::new("Pocket Songs", "Кишенькові пісні"),
            tagline: LocaleText::new(
                "Tiny poems that fit in a coat pocket.",
                "Маленькі вірші, що вміщуються в кишені пальта.",
            ),
            cover_path: "assets/book-6-cover.jpg",
            category: Category::Poetry,
            store_overrides: &[],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with_cover(cover_path: &'static str) -> Book {
        Book {
            title: LocaleText::new("t", "т"),
            tagline: LocaleText::new("s", "с"),
            cover_path,
            category: Category::Adventure,
            store_overrides: &[],
        }
    }

    #[test]
    fn number_is_extracted_from_cover_path() {
        assert_eq!(book_with_cover("assets/book-7-cover.jpg").number(), "7");
        assert_eq!(book_with_cover("assets/book-12-cover.png").number(), "12");
    }

    #[test]
    fn number_falls_back_to_one_when_unmatched() {
        assert_eq!(book_with_cover("assets/cover.jpg").number(), "1");
        assert_eq!(book_with_cover("").number(), "1");
    }

    #[test]
    fn preview_path_embeds_number_and_locale() {
        let book = book_with_cover("assets/book-3-cover.jpg");
        assert_eq!(book.preview_path(Locale::Ua), "assets/book-3-preview-ua.pdf");
        assert_eq!(book.preview_path(Locale::En), "assets/book-3-preview-en.pdf");
    }

    #[test]
    fn store_link_uses_derived_default() {
        let book = book_with_cover("assets/book-4-cover.jpg");
        assert_eq!(book.store_link(Locale::En), "https://amazon.com/book-4-en");
        assert_eq!(book.store_link(Locale::Ua), "https://amazon.com/book-4-ua");
    }

    #[test]
    fn store_override_takes_precedence_for_its_locale_only() {
        let book = Book {
            store_overrides: &[StoreOverride {
                locale: Locale::Ua,
                url: "https://amazon.de/dp/custom",
            }],
            ..book_with_cover("assets/book-2-cover.jpg")
        };
        assert_eq!(book.store_link(Locale::Ua), "https://amazon.de/dp/custom");
        assert_eq!(book.store_link(Locale::En), "https://amazon.com/book-2-en");
    }

    #[test]
    fn all_filter_admits_every_category() {
        for category in Category::ALL {
            assert!(CategoryFilter::All.admits(category));
        }
    }

    #[test]
    fn single_category_filter_admits_only_its_own() {
        let filter = CategoryFilter::Only(Category::Poetry);
        assert!(filter.admits(Category::Poetry));
        assert!(!filter.admits(Category::Adventure));
        assert!(!filter.admits(Category::FairyTales));
    }

    #[test]
    fn catalog_cover_paths_all_carry_numbers() {
        for book in catalog() {
            assert!(
                book.cover_path.contains(&format!("book-{}", book.number())),
                "cover path {} disagrees with number {}",
                book.cover_path,
                book.number()
            );
        }
    }

    #[test]
    fn catalog_spans_every_category() {
        let books = catalog();
        for category in Category::ALL {
            assert!(books.iter().any(|b| b.category == category));
        }
    }
}

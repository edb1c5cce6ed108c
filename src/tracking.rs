// SPDX-License-Identifier: MPL-2.0
//! Observability sink for tracked user actions.
//!
//! Each tracked action becomes one structured `tracing` event under the
//! `bookstand::tracking` target. Integrators can redirect these to an
//! analytics backend with a custom subscriber layer without touching the
//! call sites.

use crate::i18n::Locale;

pub const TARGET: &str = "bookstand::tracking";

pub fn newsletter_subscription(email: &str, locale: Locale) {
    tracing::info!(
        target: TARGET,
        email,
        locale = locale.as_str(),
        "newsletter subscription"
    );
}

pub fn purchase_click(book_number: &str, locale: Locale) {
    tracing::info!(
        target: TARGET,
        book = book_number,
        locale = locale.as_str(),
        "store link clicked"
    );
}

pub fn language_switch(locale: Locale) {
    tracing::info!(
        target: TARGET,
        locale = locale.as_str(),
        document_tag = locale.document_tag(),
        "language switched"
    );
}

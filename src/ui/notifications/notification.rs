// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::i18n::LocaleText;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays fully visible before it starts fading.
pub const VISIBLE_DURATION: Duration = Duration::from_millis(4000);

/// Length of the fade-out at the end of a toast's life.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity tag; determines the accent color only, not the lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }
}

/// Where a notification is in its fixed lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
    Expired,
}

/// A transient, auto-dismissing message shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    text: LocaleText,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, text: LocaleText) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            text,
            created_at: Instant::now(),
        }
    }

    pub fn success(text: LocaleText) -> Self {
        Self::new(Severity::Success, text)
    }

    pub fn error(text: LocaleText) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn info(text: LocaleText) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn warning(text: LocaleText) -> Self {
        Self::new(Severity::Warning, text)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message, resolved per locale at render time.
    #[must_use]
    pub fn text(&self) -> LocaleText {
        self.text
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Lifecycle phase at the given age.
    #[must_use]
    pub fn phase_at(age: Duration) -> Phase {
        if age < VISIBLE_DURATION {
            Phase::Visible
        } else if age < VISIBLE_DURATION + FADE_DURATION {
            Phase::Fading
        } else {
            Phase::Expired
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Self::phase_at(self.age())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::strings;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success(strings::NEWSLETTER_SUBSCRIBED);
        let n2 = Notification::success(strings::NEWSLETTER_SUBSCRIBED);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn constructors_set_correct_severity() {
        let text = strings::NEWSLETTER_SUBSCRIBED;
        assert_eq!(Notification::success(text).severity(), Severity::Success);
        assert_eq!(Notification::error(text).severity(), Severity::Error);
        assert_eq!(Notification::info(text).severity(), Severity::Info);
        assert_eq!(Notification::warning(text).severity(), Severity::Warning);
    }

    #[test]
    fn lifecycle_phases_follow_fixed_durations() {
        assert_eq!(
            Notification::phase_at(Duration::from_millis(0)),
            Phase::Visible
        );
        assert_eq!(
            Notification::phase_at(VISIBLE_DURATION - Duration::from_millis(1)),
            Phase::Visible
        );
        assert_eq!(Notification::phase_at(VISIBLE_DURATION), Phase::Fading);
        assert_eq!(
            Notification::phase_at(VISIBLE_DURATION + FADE_DURATION),
            Phase::Expired
        );
    }

    #[test]
    fn fresh_notification_is_visible() {
        let n = Notification::info(strings::NEWSLETTER_SUBSCRIBED);
        assert_eq!(n.phase(), Phase::Visible);
    }
}

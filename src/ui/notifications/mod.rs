// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the top-right corner to report the
//! outcome of user actions (subscription success, validation errors)
//! without blocking interaction. Every toast lives for the same fixed
//! duration, then fades out and is removed.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, Phase, Severity};
pub use toast::Toast;

// SPDX-License-Identifier: MPL-2.0
//! UI components.
//!
//! Each component owns its state and exposes `Message`/`Event` enums with
//! free `update` and `view` functions; the application root routes between
//! them.

pub mod banner;
pub mod design_tokens;
pub mod navbar;
pub mod newsletter;
pub mod notifications;
pub mod preview;
pub mod storefront;
pub mod styles;

// SPDX-License-Identifier: MPL-2.0
//! `bookstand` is a bilingual book showcase and storefront built with the
//! Iced GUI framework.
//!
//! It presents a small catalog of books with category filtering, a rotating
//! promotional banner, a preview overlay, and a newsletter signup form, all
//! switchable between English and Ukrainian with a persisted preference.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod link;
pub mod tracking;
pub mod ui;

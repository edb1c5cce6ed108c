// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions: the shared timer and global key handling.
//!
//! The timer subscription is demand-driven. It exists only while some
//! component has pending time-driven work, so an idle window schedules
//! nothing.

use super::{App, Message, TICK_INTERVAL};
use iced::keyboard::key::Named;
use iced::keyboard::{self, Key};
use iced::{time, Subscription};

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![keyboard_subscription()];
        if self.wants_tick() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
        }
        Subscription::batch(subscriptions)
    }

    fn wants_tick(&self) -> bool {
        self.banner.autoplay_armed()
            || self.notifications.has_notifications()
            || self.storefront.revealing()
    }
}

fn keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed {
            key: Key::Named(named @ (Named::Escape | Named::ArrowLeft | Named::ArrowRight)),
            ..
        } => Some(Message::KeyPressed(Key::Named(named))),
        _ => None,
    })
}

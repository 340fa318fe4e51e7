// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys are routed to the gallery from anywhere in the window, but only
//! while the keyboard registry holds a listener. F5 always requests a rescan.

use super::Message;
use crate::application::port::NavigationKey;
use crate::gallery;
use iced::{event, keyboard, Subscription};

/// Maps an Iced key to the identifiers the gallery understands.
pub fn navigation_key(key: &keyboard::Key) -> NavigationKey {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => NavigationKey::ArrowLeft,
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => NavigationKey::ArrowRight,
        _ => NavigationKey::Other,
    }
}

/// Window-global arrow-key routing, active only while `listening`.
pub fn create_gallery_key_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event else {
            return None;
        };
        match navigation_key(key) {
            NavigationKey::Other => None,
            arrow => Some(Message::Gallery(gallery::Message::KeyPressed(arrow))),
        }
    })
}

/// F5 triggers a rescan of the current directory.
pub fn create_rescan_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match &event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::F5),
            ..
        }) => Some(Message::Rescan),
        _ => None,
    })
}

// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native keyboard events to playhead seeking. Only the arrow keys
//! are consumed, and only when no widget captured them; every other key
//! keeps its default behavior.

use super::Message;
use crate::player::SeekDirection;
use iced::{event, keyboard, Subscription};

/// Creates the keyboard seek subscription.
pub fn keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| match status {
        event::Status::Captured => None,
        event::Status::Ignored => match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                seek_direction(&key).map(Message::Seek)
            }
            _ => None,
        },
    })
}

/// Maps a pressed key to a seek command, if it is one of the arrow keys.
pub(crate) fn seek_direction(key: &keyboard::Key) -> Option<SeekDirection> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(SeekDirection::Backward),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(SeekDirection::Forward),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    #[test]
    fn arrow_left_seeks_backward() {
        assert_eq!(
            seek_direction(&Key::Named(Named::ArrowLeft)),
            Some(SeekDirection::Backward)
        );
    }

    #[test]
    fn arrow_right_seeks_forward() {
        assert_eq!(
            seek_direction(&Key::Named(Named::ArrowRight)),
            Some(SeekDirection::Forward)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(seek_direction(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(seek_direction(&Key::Named(Named::Space)), None);
        assert_eq!(seek_direction(&Key::Character("k".into())), None);
    }
}

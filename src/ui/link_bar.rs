// SPDX-License-Identifier: MPL-2.0
//! Link bar component: shows the stream link and copies it to the system
//! clipboard with transient visual feedback on the copy button.
//!
//! A copy attempt resolves to success or failure before the feedback glyph
//! is set, and each attempt schedules its own one-second reset. Overlapping
//! attempts therefore race their resets; whichever fires last wins. Both
//! resets restore the same idle glyph, so the button can never get stuck
//! showing an outcome.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, Row, Text},
    Element, Task,
};
use std::time::Duration;

/// How long an outcome glyph stays on the copy button before reverting.
const FEEDBACK_RESET_DELAY: Duration = Duration::from_secs(1);

const GLYPH_CLIPBOARD: &str = "⧉";
const GLYPH_CHECK: &str = "✓";
const GLYPH_CROSS: &str = "✕";

/// Transient feedback shown on the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    /// Default clipboard glyph.
    #[default]
    Idle,
    /// The link reached the clipboard.
    Copied,
    /// The clipboard write was rejected by the platform.
    Failed,
}

impl Feedback {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Feedback::Idle => GLYPH_CLIPBOARD,
            Feedback::Copied => GLYPH_CHECK,
            Feedback::Failed => GLYPH_CROSS,
        }
    }
}

/// Messages emitted by the link bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// The copy button was pressed.
    CopyRequested,
    /// The clipboard write resolved.
    CopyFinished(Result<(), Error>),
    /// A feedback reset timer fired.
    FeedbackExpired,
}

/// Link bar state: the displayed link and the copy button feedback.
#[derive(Debug, Default)]
pub struct State {
    link: String,
    feedback: Feedback,
}

impl State {
    #[must_use]
    pub fn new(link: String) -> Self {
        Self {
            link,
            feedback: Feedback::Idle,
        }
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CopyRequested => {
                let text = self.link.clone();
                Task::perform(async move { copy_text(&text) }, Message::CopyFinished)
            }
            Message::CopyFinished(result) => {
                // The failure stops here: it becomes a glyph, never an error
                // surfaced to the rest of the application.
                self.feedback = match result {
                    Ok(()) => Feedback::Copied,
                    Err(_) => Feedback::Failed,
                };
                // The sleep is constructed inside the future so the handler
                // itself never needs an active runtime.
                Task::perform(
                    async { tokio::time::sleep(FEEDBACK_RESET_DELAY).await },
                    |_| Message::FeedbackExpired,
                )
            }
            Message::FeedbackExpired => {
                // Every pending reset restores the same idle glyph, so the
                // ordering of racing timers does not matter.
                self.feedback = Feedback::Idle;
                Task::none()
            }
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let label = Text::new(i18n.tr("stream-link-label")).size(typography::CAPTION);

        let link = Text::new(self.link.as_str()).size(typography::BODY);

        let glyph = match self.feedback {
            Feedback::Idle => Text::new(self.feedback.glyph()),
            Feedback::Copied => Text::new(self.feedback.glyph()).color(palette::SUCCESS_500),
            Feedback::Failed => Text::new(self.feedback.glyph()).color(palette::ERROR_500),
        };

        let copy_button = button(glyph.size(typography::BODY))
            .on_press(Message::CopyRequested)
            .padding(spacing::XS);

        Row::new()
            .push(label)
            .push(link)
            .push(copy_button)
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .into()
    }
}

/// Writes `text` to the system clipboard.
fn copy_text(text: &str) -> Result<(), Error> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| Error::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_idle() {
        let state = State::new("https://example.org/watch/abc".to_string());
        assert_eq!(state.feedback(), Feedback::Idle);
        assert_eq!(state.link(), "https://example.org/watch/abc");
    }

    #[test]
    fn successful_copy_shows_check() {
        let mut state = State::new("link".to_string());
        let _ = state.update(Message::CopyFinished(Ok(())));
        assert_eq!(state.feedback(), Feedback::Copied);
    }

    #[test]
    fn failed_copy_shows_cross() {
        let mut state = State::new("link".to_string());
        let _ = state.update(Message::CopyFinished(Err(Error::Clipboard(
            "denied".to_string(),
        ))));
        assert_eq!(state.feedback(), Feedback::Failed);
    }

    #[test]
    fn expiry_restores_idle_after_either_outcome() {
        for outcome in [Ok(()), Err(Error::Clipboard("denied".to_string()))] {
            let mut state = State::new("link".to_string());
            let _ = state.update(Message::CopyFinished(outcome));
            let _ = state.update(Message::FeedbackExpired);
            assert_eq!(state.feedback(), Feedback::Idle);
        }
    }

    #[test]
    fn overlapping_copies_end_idle_regardless_of_timer_order() {
        let mut state = State::new("link".to_string());

        // Second copy lands before the first reset fires.
        let _ = state.update(Message::CopyFinished(Ok(())));
        let _ = state.update(Message::CopyFinished(Err(Error::Clipboard(
            "denied".to_string(),
        ))));
        assert_eq!(state.feedback(), Feedback::Failed);

        // Both pending resets fire, in whichever order.
        let _ = state.update(Message::FeedbackExpired);
        let _ = state.update(Message::FeedbackExpired);
        assert_eq!(state.feedback(), Feedback::Idle);
    }

    #[test]
    fn glyphs_are_distinct_per_feedback() {
        assert_ne!(Feedback::Idle.glyph(), Feedback::Copied.glyph());
        assert_ne!(Feedback::Copied.glyph(), Feedback::Failed.glyph());
        assert_ne!(Feedback::Failed.glyph(), Feedback::Idle.glyph());
    }
}

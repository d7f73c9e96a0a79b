// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler runs to completion on its triggering message; no handler
//! depends on another's in-flight work. Preference changes are persisted
//! as they happen.

use super::{App, Message};
use crate::ui::settings_panel::{self, Event as SettingsPanelEvent};
use crate::ui::state::PanelPosition;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ToggleSettingsPanel => {
            app.panel = Some(PanelPosition::toggled(app.panel));
            app.persist_preferences();
            Task::none()
        }
        Message::Seek(direction) => {
            let delta = direction.signed_step(app.seek_step);
            app.playhead.seek_by(delta);
            Task::none()
        }
        Message::LinkBar(message) => app.link_bar.update(message).map(Message::LinkBar),
        Message::SettingsPanel(message) => {
            match settings_panel::update(message) {
                SettingsPanelEvent::HideMetadataToggled(hidden) => {
                    app.visibility.set_hide_metadata(hidden);
                    app.persist_preferences();
                }
                SettingsPanelEvent::SimpleViewToggled(simple) => {
                    app.visibility.set_simple_view(simple);
                    app.persist_preferences();
                }
                SettingsPanelEvent::LanguageSelected(locale) => {
                    app.i18n.set_locale(locale);
                    app.persist_preferences();
                }
                SettingsPanelEvent::Close => {
                    app.panel = Some(PanelPosition::OffScreenRight);
                    app.persist_preferences();
                }
            }
            Task::none()
        }
    }
}

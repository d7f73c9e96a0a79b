// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::player::SeekDirection;
use crate::ui::link_bar;
use crate::ui::settings_panel;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    LinkBar(link_bar::Message),
    SettingsPanel(settings_panel::Message),
    /// The settings button was pressed.
    ToggleSettingsPanel,
    /// An arrow key requested a relative seek.
    Seek(SeekDirection),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Stream URL to display and copy; the desktop analogue of the watch
    /// page's own address.
    pub url: Option<String>,
}

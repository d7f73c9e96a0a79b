// SPDX-License-Identifier: MPL-2.0
//! UI components for the watch page: the link bar with clipboard feedback,
//! the slide-in settings panel, shared design tokens, and the typed UI
//! state they render from.

pub mod design_tokens;
pub mod link_bar;
pub mod settings_panel;
pub mod state;

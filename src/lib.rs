// SPDX-License-Identifier: MPL-2.0
//! `watchpane` is a small watch-page companion for shared media streams,
//! built with the Iced GUI framework.
//!
//! It shows the stream link with one-press clipboard copy, lets the viewer
//! hide metadata or switch to a simplified layout, slides a settings panel
//! in and out, and maps the arrow keys to playhead seeking. It demonstrates
//! internationalization with Fluent, user preference management, and
//! modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod player;
pub mod ui;

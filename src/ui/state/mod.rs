// SPDX-License-Identifier: MPL-2.0
//! Typed UI state owned by the application.
//!
//! Views derive what they render from these values instead of toggling
//! presentation flags ad hoc, so every state here is inspectable and
//! testable without a rendering surface.

pub mod panel;
pub mod visibility;

pub use panel::PanelPosition;
pub use visibility::{Region, SectionVisibility};

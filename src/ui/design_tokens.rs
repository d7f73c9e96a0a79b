// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens shared by the views.
//!
//! Tokens are designed to be consistent; maintain the ratios
//! (e.g. `MD = XS * 4`) when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Component Sizes
// ============================================================================

pub mod sizing {
    /// Width of the slide-in settings panel when flush right.
    pub const SETTINGS_PANEL_WIDTH: f32 = 280.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 16.0;
    pub const TITLE: f32 = 22.0;
    pub const TITLE_LG: f32 = 28.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::SM, spacing::XS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 4.0);
    }

    #[test]
    fn typography_scale_is_increasing() {
        assert!(typography::CAPTION < typography::BODY);
        assert!(typography::BODY < typography::TITLE);
        assert!(typography::TITLE < typography::TITLE_LG);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Visibility state for the toggleable page regions.

/// Toggleable regions of the watch page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The stream title (metadata) block.
    Title,
    /// The details block under the player, including the link bar.
    Details,
    /// The application wordmark above the page.
    Logo,
}

/// Checkbox-driven visibility of the page regions.
///
/// Each region's hidden-ness is a pure function of the two checkbox values:
/// the metadata checkbox hides the title, the simple-view checkbox hides
/// the details and logo together. Deriving both regions from one boolean
/// makes the lockstep structural; no intermediate state can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionVisibility {
    hide_metadata: bool,
    simple_view: bool,
}

impl SectionVisibility {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hide_metadata(&self) -> bool {
        self.hide_metadata
    }

    #[must_use]
    pub fn simple_view(&self) -> bool {
        self.simple_view
    }

    pub fn set_hide_metadata(&mut self, hidden: bool) {
        self.hide_metadata = hidden;
    }

    pub fn set_simple_view(&mut self, simple: bool) {
        self.simple_view = simple;
    }

    #[must_use]
    pub fn is_hidden(&self, region: Region) -> bool {
        match region {
            Region::Title => self.hide_metadata,
            Region::Details | Region::Logo => self.simple_view,
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Settings panel positioning state.

/// Position of the slide-in settings panel.
///
/// Exactly one position holds at any time once established. The panel may
/// start out in an unknown state (for example after reading a garbled
/// persisted value), which is represented as `Option::None` by the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPosition {
    /// Closed: parked past the right edge of the window.
    OffScreenRight,
    /// Open: flush against the right edge of the window.
    FlushRight,
}

impl PanelPosition {
    /// Next position after a toggle, keyed off the current state.
    ///
    /// Only a currently-closed panel opens; every other state, including
    /// the unknown one, resolves to closed. The asymmetry is intentional
    /// and long-standing: an unknown panel must settle as closed on the
    /// first toggle, not open.
    #[must_use]
    pub fn toggled(current: Option<PanelPosition>) -> PanelPosition {
        match current {
            Some(PanelPosition::OffScreenRight) => PanelPosition::FlushRight,
            _ => PanelPosition::OffScreenRight,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, PanelPosition::FlushRight)
    }

    /// Stable string form used in `settings.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PanelPosition::OffScreenRight => "closed",
            PanelPosition::FlushRight => "open",
        }
    }

    /// Lenient parse of a persisted value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<PanelPosition> {
        match value {
            "closed" => Some(PanelPosition::OffScreenRight),
            "open" => Some(PanelPosition::FlushRight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_positions() {
        let opened = PanelPosition::toggled(Some(PanelPosition::OffScreenRight));
        assert_eq!(opened, PanelPosition::FlushRight);

        let closed = PanelPosition::toggled(Some(opened));
        assert_eq!(closed, PanelPosition::OffScreenRight);
    }

    #[test]
    fn toggle_parity_over_many_clicks() {
        for clicks in 0..=8 {
            let mut state = Some(PanelPosition::OffScreenRight);
            for _ in 0..clicks {
                state = Some(PanelPosition::toggled(state));
            }
            let expected = if clicks % 2 == 0 {
                PanelPosition::OffScreenRight
            } else {
                PanelPosition::FlushRight
            };
            assert_eq!(state, Some(expected), "after {} clicks", clicks);
        }
    }

    #[test]
    fn unknown_state_resolves_to_closed_on_first_toggle() {
        assert_eq!(PanelPosition::toggled(None), PanelPosition::OffScreenRight);
    }

    #[test]
    fn is_open_reports_flush_right_only() {
        assert!(PanelPosition::FlushRight.is_open());
        assert!(!PanelPosition::OffScreenRight.is_open());
    }

    #[test]
    fn parse_round_trips_stable_strings() {
        for position in [PanelPosition::OffScreenRight, PanelPosition::FlushRight] {
            assert_eq!(PanelPosition::parse(position.as_str()), Some(position));
        }
    }

    #[test]
    fn parse_rejects_garbled_values() {
        assert_eq!(PanelPosition::parse("ajar"), None);
        assert_eq!(PanelPosition::parse(""), None);
    }
}

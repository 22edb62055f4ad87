//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state so rendering
//! controls can evolve independently of platform data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color scheme applied to the document and theme-aware assets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }
}

/// UI state for theme and navigation chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu_collapsed: bool,
}

//! Local UI chrome state (theme, navbar, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation flags out of page content so the chrome can
//! change without touching the catalog or contact state. The app root owns a
//! single `RwSignal<UiState>` and provides it through context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the navbar switches to its condensed style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// UI state for theme and navigation chrome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    pub fn open_menu(&mut self) {
        self.mobile_menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Record the window scroll offset. Returns true when the flag changed.
    pub fn set_scroll_offset(&mut self, y: f64) -> bool {
        let scrolled = is_scrolled(y);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[must_use]
pub fn is_scrolled(y: f64) -> bool {
    y > SCROLL_THRESHOLD_PX
}

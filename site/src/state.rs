//! UI state owned by individual components.
//!
//! The page has exactly two kinds of runtime state: the navigation bar's
//! scroll/menu booleans and the one-shot "revealed" latch of animated blocks.
//! Both are small `Copy` values so a component can keep them in a signal and
//! hand them to the view as plain inputs.

/// Vertical scroll offset (px) past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Navigation bar state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page is scrolled past [`SCROLL_THRESHOLD`]
    pub scrolled: bool,
    /// Mobile menu is expanded
    pub menu_open: bool,
}

impl NavState {
    /// Record the current scroll offset. Returns `true` when `scrolled` flipped.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// The mobile menu control was pressed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was followed; the mobile menu closes.
    pub fn activate_link(&mut self) {
        self.menu_open = false;
    }

    /// Class list of the `<nav>` root for this state.
    ///
    /// The static enhancement script toggles the same `nav-scrolled` and
    /// `menu-open` classes, so both renderings share one stylesheet.
    pub fn class_name(self) -> &'static str {
        match (self.scrolled, self.menu_open) {
            (false, false) => "nav",
            (true, false) => "nav nav-scrolled",
            (false, true) => "nav menu-open",
            (true, true) => "nav nav-scrolled menu-open",
        }
    }
}

/// One-shot entrance animation latch.
///
/// Starts hidden, becomes revealed the first time its block intersects the
/// viewport and never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    /// Feed one visibility observation. Returns `true` only on the observation
    /// that reveals the block.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Whether the block has been revealed.
    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

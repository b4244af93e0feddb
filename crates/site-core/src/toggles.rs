//! Two-state UI toggles. The DOM class list is the source of truth; the web
//! frontend rebuilds these from classes on every event and writes the result
//! back.

use crate::constants::NAVBAR_CONDENSE_SCROLL_Y;

pub const MENU_ICON_CLOSED: &str = "fa-bars";
pub const MENU_ICON_OPEN: &str = "fa-times";

/// Mobile menu visibility plus the two icon classes on its toggle button.
///
/// Toggling flips all three independently, so whatever the markup started
/// with is restored after two toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub hidden: bool,
    pub bars: bool,
    pub times: bool,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::closed()
    }
}

impl MenuState {
    #[inline]
    pub const fn closed() -> Self {
        Self {
            hidden: true,
            bars: true,
            times: false,
        }
    }

    #[inline]
    pub fn toggle(&mut self) {
        self.hidden = !self.hidden;
        self.bars = !self.bars;
        self.times = !self.times;
    }

    #[inline]
    pub fn close(&mut self) {
        *self = Self::closed();
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        !self.hidden
    }
}

/// FAQ accordion. A click closes every other item and toggles the clicked
/// one, so after any click at most one item is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    pub fn from_flags(flags: &[bool]) -> Self {
        Self {
            open: flags.to_vec(),
        }
    }

    /// Out-of-range clicks are ignored.
    pub fn click(&mut self, index: usize) {
        let Some(&was_open) = self.open.get(index) else {
            return;
        };
        self.open.iter_mut().for_each(|o| *o = false);
        self.open[index] = !was_open;
    }

    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn active(&self) -> Option<usize> {
        self.open.iter().position(|&o| o)
    }

    pub fn active_count(&self) -> usize {
        self.open.iter().filter(|&&o| o).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[inline]
pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_CONDENSE_SCROLL_Y
}

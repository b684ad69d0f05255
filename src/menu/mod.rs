//! Menu state machines and the submenu delegation chain.
//!
//! Every tick the run loop hands the root menu one [`TickInput`]. Each
//! menu first offers it to its active submenu through its [`MenuNode`];
//! only when nothing deeper claims the tick does the menu act itself.

pub mod band_menu;
pub mod main_menu;
pub mod selector;
pub mod tuner;

#[cfg(test)]
mod tests;

use crate::registry::Point;

/// Debounced press classification for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPress {
    #[default]
    None,
    Short,
    Long,
}

/// All inputs sampled for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInput {
    /// Encoder push button.
    pub tuner_button: ButtonPress,
    pub touch_button: ButtonPress,
    /// Only meaningful when `touch_button` is not `None`.
    pub touch_point: Point,
    /// Encoder counts since the previous tick.
    pub knob: i16,
}

/// Result of running a menu for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuStatus {
    /// Keep this menu on the chain.
    StillActive,
    /// Menu finished; the parent must redraw itself.
    ExitedRedraw,
    /// Menu finished; screen is already correct.
    ExitedNoRedraw,
}

/// A screen that takes part in the delegation chain.
pub trait Menu<IO> {
    /// Draw the menu from scratch when it is opened.
    fn init(&mut self, io: &mut IO);

    fn run_menu(&mut self, io: &mut IO, input: &TickInput) -> MenuStatus;
}

/// Link from a menu to the submenus it can open, with at most one active.
pub struct MenuNode<'m, IO> {
    submenus: &'m mut [&'m mut dyn Menu<IO>],
    active: Option<usize>,
}

impl<'m, IO> MenuNode<'m, IO> {
    pub fn new(submenus: &'m mut [&'m mut dyn Menu<IO>]) -> Self {
        Self {
            submenus,
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Make `index` the active submenu and draw it. Unknown index is ignored.
    pub fn open(&mut self, io: &mut IO, index: usize) -> bool {
        let Some(menu) = self.submenus.get_mut(index) else {
            warn!("No submenu at index {}", index);
            return false;
        };
        debug!("Opening submenu {}", index);
        menu.init(io);
        self.active = Some(index);
        true
    }

    /// Offer the tick to the active submenu.
    ///
    /// Returns `true` when a submenu consumed it. `redraw` repaints the
    /// owning menu and runs only when the submenu exits with
    /// [`MenuStatus::ExitedRedraw`].
    pub fn run_submenu(
        &mut self,
        io: &mut IO,
        input: &TickInput,
        redraw: impl FnOnce(&mut IO),
    ) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        let Some(menu) = self.submenus.get_mut(index) else {
            self.active = None;
            return false;
        };

        match menu.run_menu(io, input) {
            MenuStatus::StillActive => {}
            MenuStatus::ExitedRedraw => {
                debug!("Submenu {} exited, redrawing", index);
                self.active = None;
                redraw(io);
            }
            MenuStatus::ExitedNoRedraw => {
                debug!("Submenu {} exited", index);
                self.active = None;
            }
        }
        true
    }
}

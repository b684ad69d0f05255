//! Band quick-select submenu.
//!
//! Opens with the knob already selecting. A short press or a touch picks
//! a band and returns to the main menu; a long press backs out unchanged.

use super::main_menu::{draw_all, draw_index};
use super::selector::Selector;
use super::{ButtonPress, Menu, MenuStatus, TickInput};
use crate::config::MENU_KNOB_COUNTS_PER_ITEM;
use crate::panel::{Activation, PanelIo};
use crate::registry::{find_pressed_button, Button, BAND_BUTTONS};

pub struct BandMenu {
    buttons: &'static [Button],
    selector: Selector,
}

impl Default for BandMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl BandMenu {
    pub const fn new() -> Self {
        Self {
            buttons: &BAND_BUTTONS,
            selector: Selector::new(MENU_KNOB_COUNTS_PER_ITEM),
        }
    }

    fn activate<IO: PanelIo>(&mut self, io: &mut IO, index: usize) -> MenuStatus {
        self.selector.cancel();
        let Some(button) = self.buttons.get(index) else {
            warn!("Ignoring activation of unknown band {}", index);
            return MenuStatus::ExitedRedraw;
        };
        match io.activate(index, button) {
            Activation::Done => {}
            Activation::OpenSubmenu(submenu) => {
                warn!("Band menu has no submenus, ignoring {}", submenu);
            }
        }
        MenuStatus::ExitedRedraw
    }
}

impl<IO: PanelIo> Menu<IO> for BandMenu {
    fn init(&mut self, io: &mut IO) {
        let buttons = self.buttons;
        draw_all(io, buttons);
        self.selector
            .begin_selecting(io, buttons, draw_index::<IO>(buttons));
    }

    fn run_menu(&mut self, io: &mut IO, input: &TickInput) -> MenuStatus {
        let buttons = self.buttons;

        match input.tuner_button {
            ButtonPress::Short => {
                let item = self
                    .selector
                    .end_selecting(io, buttons, draw_index::<IO>(buttons));
                return self.activate(io, item);
            }
            ButtonPress::Long => {
                debug!("Band menu cancelled");
                self.selector.cancel();
                return MenuStatus::ExitedRedraw;
            }
            ButtonPress::None => {}
        }

        if input.touch_button != ButtonPress::None {
            return match find_pressed_button(buttons, input.touch_point) {
                Some(index) => self.activate(io, index),
                None => MenuStatus::StillActive,
            };
        }

        self.selector
            .adjust(io, buttons, input.knob, draw_index::<IO>(buttons));
        MenuStatus::StillActive
    }
}

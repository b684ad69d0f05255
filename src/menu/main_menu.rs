//! Root menu: VFO readout, sideband and band buttons.
//!
//! Input priority per tick, at most one class handled:
//!   1. active submenu (gets first refusal)
//!   2. tuner button - short toggles knob selection / activates,
//!      long toggles morse menu feedback
//!   3. touch - activates the button under the finger, ending any selection
//!   4. knob - moves the selection or tunes the VFO

use core::fmt::Write;

use heapless::String;

use super::selector::Selector;
use super::tuner::{Tuned, Tuner};
use super::{ButtonPress, Menu, MenuNode, MenuStatus, TickInput};
use crate::config::{MENU_KNOB_COUNTS_PER_ITEM, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::panel::{
    persist, Activation, Colors, Cue, FrequencySource, PanelIo, Screen, SettingsStore,
    COLORS_ACTIVE, COLORS_BLANK, COLORS_INACTIVE, COLORS_SELECTED,
};
use crate::registry::{find_pressed_button, Button, ButtonAction, Rect};
use crate::settings::{Vfo, VfoMode};

const SCREEN_RECT: Rect = Rect::new(0, 0, SCREEN_WIDTH as u16 - 1, SCREEN_HEIGHT as u16 - 1);

pub struct MainMenu<'m, IO> {
    buttons: &'m [Button],
    node: MenuNode<'m, IO>,
    selector: Selector,
    tuner: Tuner,
}

impl<'m, IO: PanelIo> MainMenu<'m, IO> {
    pub fn new(buttons: &'m [Button], submenus: &'m mut [&'m mut dyn Menu<IO>]) -> Self {
        Self {
            buttons,
            node: MenuNode::new(submenus),
            selector: Selector::new(MENU_KNOB_COUNTS_PER_ITEM),
            tuner: Tuner::new(),
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.selector.is_selecting()
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn active_submenu(&self) -> Option<usize> {
        self.node.active()
    }

    pub fn draw(&self, io: &mut IO) {
        draw_all(io, self.buttons);
    }

    /// Run one input tick. The main menu never exits, so this always
    /// reports [`MenuStatus::StillActive`].
    pub fn process_tick(&mut self, io: &mut IO, input: &TickInput) -> MenuStatus {
        let buttons = self.buttons;
        if self.node.run_submenu(io, input, |io| draw_all(io, buttons)) {
            self.selector.cancel();
            return MenuStatus::StillActive;
        }

        match input.tuner_button {
            ButtonPress::Short => {
                if self.selector.is_selecting() {
                    let item = self
                        .selector
                        .end_selecting(io, buttons, draw_index::<IO>(buttons));
                    self.activate(io, item);
                } else {
                    self.selector
                        .begin_selecting(io, buttons, draw_index::<IO>(buttons));
                }
                return MenuStatus::StillActive;
            }
            ButtonPress::Long => {
                toggle_morse_menu(io);
                return MenuStatus::StillActive;
            }
            ButtonPress::None => {}
        }

        if input.touch_button != ButtonPress::None {
            // Long and short touches behave the same.
            match find_pressed_button(buttons, input.touch_point) {
                Some(index) => {
                    // A touch overrides any knob selection in progress.
                    self.selector.cancel();
                    self.activate(io, index);
                }
                None => debug!(
                    "Touch at ({}, {}) missed all buttons",
                    input.touch_point.x,
                    input.touch_point.y
                ),
            }
            return MenuStatus::StillActive;
        }

        if self.selector.is_selecting() {
            self.selector
                .adjust(io, buttons, input.knob, draw_index::<IO>(buttons));
        } else {
            match self.tuner.tune(io, input.knob) {
                Tuned::Idle => {}
                Tuned::Retuned { mode_changed: false } => {
                    if let Some(readout) = active_readout(io, buttons) {
                        draw_button(io, readout, false);
                    }
                }
                Tuned::Retuned { mode_changed: true } => {
                    persist(io);
                    draw_all(io, buttons);
                }
            }
        }

        MenuStatus::StillActive
    }

    fn activate(&mut self, io: &mut IO, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            warn!("Ignoring activation of unknown button {}", index);
            return;
        };
        debug!("Activating button {}", index);
        match io.activate(index, button) {
            Activation::Done => draw_all(io, self.buttons),
            Activation::OpenSubmenu(submenu) => {
                self.node.open(io, submenu);
            }
        }
    }
}

impl<'m, IO: PanelIo> Menu<IO> for MainMenu<'m, IO> {
    fn init(&mut self, io: &mut IO) {
        self.draw(io);
    }

    fn run_menu(&mut self, io: &mut IO, input: &TickInput) -> MenuStatus {
        self.process_tick(io, input)
    }
}

fn toggle_morse_menu<IO: PanelIo>(io: &mut IO) {
    if io.settings().morse_menu_on {
        // Play while still enabled, then switch off.
        io.play_feedback(Cue::Disabled);
        io.settings_mut().morse_menu_on = false;
    } else {
        io.settings_mut().morse_menu_on = true;
        io.play_feedback(Cue::Enabled);
    }
    info!("Morse menu feedback: {}", io.settings().morse_menu_on);
    persist(io);
}

/// The button showing the active VFO's frequency.
fn active_readout<'b, IO: SettingsStore>(io: &IO, buttons: &'b [Button]) -> Option<&'b Button> {
    let wanted = match io.settings().active_vfo {
        Vfo::A => ButtonAction::VfoA,
        Vfo::B => ButtonAction::VfoB,
    };
    buttons.iter().find(|button| button.action == wanted)
}

pub(super) fn draw_index<IO>(buttons: &[Button]) -> impl FnMut(&mut IO, usize, bool) + '_
where
    IO: Screen + SettingsStore + FrequencySource,
{
    move |io, index, highlighted| {
        if let Some(button) = buttons.get(index) {
            draw_button(io, button, highlighted);
        }
    }
}

/// Blank the screen and paint every button.
pub fn draw_all<IO>(io: &mut IO, buttons: &[Button])
where
    IO: Screen + SettingsStore + FrequencySource,
{
    io.render_region("", SCREEN_RECT, COLORS_BLANK);
    for button in buttons {
        draw_button(io, button, false);
    }
}

/// Paint one button in the style matching the radio state.
pub fn draw_button<IO>(io: &mut IO, button: &Button, highlighted: bool)
where
    IO: Screen + SettingsStore + FrequencySource,
{
    let colors = button_colors(io, button.action, highlighted);
    let text = button_text(io, button);
    io.render_region(text.as_str(), button.region, colors);
}

fn button_colors<IO>(io: &IO, action: ButtonAction, highlighted: bool) -> Colors
where
    IO: SettingsStore + FrequencySource,
{
    if highlighted {
        return COLORS_SELECTED;
    }
    let active = match action {
        ButtonAction::VfoA => io.settings().active_vfo == Vfo::A,
        ButtonAction::VfoB => io.settings().active_vfo == Vfo::B,
        ButtonAction::Usb => io.active_mode() == VfoMode::Usb,
        ButtonAction::Lsb => io.active_mode() == VfoMode::Lsb,
        ButtonAction::Bands | ButtonAction::Band { .. } => false,
    };
    if active {
        COLORS_ACTIVE
    } else {
        COLORS_INACTIVE
    }
}

/// VFO buttons show their frequency in kHz; everything else its label.
fn button_text<IO: SettingsStore>(io: &IO, button: &Button) -> String<16> {
    let mut text = String::new();
    let vfo = match button.action {
        ButtonAction::VfoA => Some((Vfo::A, 'A')),
        ButtonAction::VfoB => Some((Vfo::B, 'B')),
        _ => None,
    };
    match vfo {
        Some((vfo, tag)) => {
            let hz = io.settings().vfo(vfo).frequency_hz;
            let _ = write!(text, "{} {}.{:02}", tag, hz / 1000, (hz % 1000) / 10);
        }
        None => {
            let _ = text.push_str(button.label);
        }
    }
    text
}

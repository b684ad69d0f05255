//! Capabilities the menu core drives.
//!
//! The firmware implements all of these on one `Device` struct; host
//! tests implement them on a recording mock. Every call is synchronous
//! and runs to completion inside the current tick.

use crate::error::Error;
use crate::registry::{Button, Rect};
use crate::settings::{Settings, VfoMode};

/// Pixel state on the monochrome panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ink {
    Off,
    On,
}

/// How a button region is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Colors {
    pub text: Ink,
    pub background: Ink,
    pub border: Ink,
}

/// Outlined, not in effect.
pub const COLORS_INACTIVE: Colors = Colors {
    text: Ink::On,
    background: Ink::Off,
    border: Ink::On,
};

/// Filled: the button's setting is in effect (active VFO, current sideband).
pub const COLORS_ACTIVE: Colors = Colors {
    text: Ink::Off,
    background: Ink::On,
    border: Ink::On,
};

/// Knob highlight ("puck") while selecting.
pub const COLORS_SELECTED: Colors = Colors {
    text: Ink::On,
    background: Ink::Off,
    border: Ink::Off,
};

/// Clears a region.
pub const COLORS_BLANK: Colors = Colors {
    text: Ink::Off,
    background: Ink::Off,
    border: Ink::Off,
};

/// Accessibility cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cue {
    /// Spell one character.
    Symbol(char),
    /// Morse menu feedback switched on.
    Enabled,
    /// Morse menu feedback switched off.
    Disabled,
}

/// What activating a button asks of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activation {
    /// Action applied; redraw the current menu.
    Done,
    /// Open the submenu with this index on the current menu's node.
    OpenSubmenu(usize),
}

/// Active VFO frequency and sideband.
pub trait FrequencySource {
    fn active_frequency(&self) -> u32;
    fn set_active_frequency(&mut self, hz: u32);
    fn active_mode(&self) -> VfoMode;
    fn set_active_mode(&mut self, mode: VfoMode);
}

pub trait Screen {
    fn render_region(&mut self, label: &str, region: Rect, colors: Colors);
}

pub trait Feedback {
    fn play_feedback(&mut self, cue: Cue);
}

pub trait SettingsStore {
    fn settings(&self) -> &Settings;
    fn settings_mut(&mut self) -> &mut Settings;
    /// Write the current settings to durable storage.
    fn persist_settings(&mut self) -> Result<(), Error>;
}

/// Per-item behaviour bound to registry entries.
pub trait ItemActions {
    fn activate(&mut self, index: usize, button: &Button) -> Activation;
}

/// Everything a menu needs from the device.
pub trait PanelIo: FrequencySource + Screen + Feedback + SettingsStore + ItemActions {}

impl<T> PanelIo for T where T: FrequencySource + Screen + Feedback + SettingsStore + ItemActions {}

/// Play a cue if morse menu feedback is switched on.
pub fn announce<IO: Feedback + SettingsStore>(io: &mut IO, cue: Cue) {
    if io.settings().morse_menu_on {
        io.play_feedback(cue);
    }
}

/// Persist settings right away. Failures are logged, never fatal.
pub fn persist<IO: SettingsStore>(io: &mut IO) {
    if let Err(err) = io.persist_settings() {
        warn!("Settings persist failed: {}", err);
    }
}

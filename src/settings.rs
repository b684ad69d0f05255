//! Persisted radio settings.
//!
//! The whole struct is stored as one small versioned record. Layout
//! (little-endian, 13 bytes):
//! ```text
//! Byte 0:     Record version (SETTINGS_VERSION)
//! Byte 1:     Flags - bit 0 = morse menu feedback on
//! Byte 2:     Active VFO (0 = A, 1 = B)
//! Byte 3-6:   VFO A frequency (Hz)
//! Byte 7:     VFO A mode (0 = LSB, 1 = USB)
//! Byte 8-11:  VFO B frequency (Hz)
//! Byte 12:    VFO B mode
//! ```

use crate::config::{DEFAULT_FREQUENCY_HZ, THRESHOLD_USB_LSB};
use crate::error::Error;

/// Serialized settings size in bytes.
pub const SETTINGS_RECORD_SIZE: usize = 13;

/// Current record layout version.
pub const SETTINGS_VERSION: u8 = 1;

const FLAG_MORSE_MENU: u8 = 0x01;

/// Sideband the active VFO runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VfoMode {
    Lsb,
    Usb,
}

impl VfoMode {
    /// Conventional sideband for a frequency.
    pub const fn for_frequency(hz: u32) -> Self {
        if hz >= THRESHOLD_USB_LSB {
            VfoMode::Usb
        } else {
            VfoMode::Lsb
        }
    }

    fn to_byte(self) -> u8 {
        match self {
            VfoMode::Lsb => 0,
            VfoMode::Usb => 1,
        }
    }

    fn from_byte(b: u8) -> Result<Self, Error> {
        match b {
            0 => Ok(VfoMode::Lsb),
            1 => Ok(VfoMode::Usb),
            _ => Err(Error::CorruptSettings),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Vfo {
    A,
    B,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VfoSettings {
    pub frequency_hz: u32,
    pub mode: VfoMode,
}

impl VfoSettings {
    pub const fn new(frequency_hz: u32) -> Self {
        Self {
            frequency_hz,
            mode: VfoMode::for_frequency(frequency_hz),
        }
    }
}

/// User settings that survive a power cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Spell out highlighted menu items in morse.
    pub morse_menu_on: bool,
    pub active_vfo: Vfo,
    pub vfo_a: VfoSettings,
    pub vfo_b: VfoSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            morse_menu_on: false,
            active_vfo: Vfo::A,
            vfo_a: VfoSettings::new(DEFAULT_FREQUENCY_HZ),
            vfo_b: VfoSettings::new(DEFAULT_FREQUENCY_HZ),
        }
    }

    pub fn vfo(&self, vfo: Vfo) -> &VfoSettings {
        match vfo {
            Vfo::A => &self.vfo_a,
            Vfo::B => &self.vfo_b,
        }
    }

    pub fn active(&self) -> &VfoSettings {
        self.vfo(self.active_vfo)
    }

    pub fn active_mut(&mut self) -> &mut VfoSettings {
        match self.active_vfo {
            Vfo::A => &mut self.vfo_a,
            Vfo::B => &mut self.vfo_b,
        }
    }

    /// Serialise into `buf`. Returns the number of bytes written.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, Error> {
        if buf.len() < SETTINGS_RECORD_SIZE {
            return Err(Error::BufferOverflow);
        }

        buf[0] = SETTINGS_VERSION;
        buf[1] = if self.morse_menu_on { FLAG_MORSE_MENU } else { 0 };
        buf[2] = match self.active_vfo {
            Vfo::A => 0,
            Vfo::B => 1,
        };
        buf[3..7].copy_from_slice(&self.vfo_a.frequency_hz.to_le_bytes());
        buf[7] = self.vfo_a.mode.to_byte();
        buf[8..12].copy_from_slice(&self.vfo_b.frequency_hz.to_le_bytes());
        buf[12] = self.vfo_b.mode.to_byte();
        Ok(SETTINGS_RECORD_SIZE)
    }

    /// Parse a stored record.
    pub fn decode(data: &[u8]) -> Result<Self, Error> {
        let Some(&version) = data.first() else {
            return Err(Error::CorruptSettings);
        };
        if version != SETTINGS_VERSION {
            return Err(Error::UnsupportedVersion(version));
        }
        if data.len() < SETTINGS_RECORD_SIZE {
            return Err(Error::CorruptSettings);
        }

        let active_vfo = match data[2] {
            0 => Vfo::A,
            1 => Vfo::B,
            _ => return Err(Error::CorruptSettings),
        };
        let freq = |at: usize| u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);

        Ok(Self {
            morse_menu_on: data[1] & FLAG_MORSE_MENU != 0,
            active_vfo,
            vfo_a: VfoSettings {
                frequency_hz: freq(3),
                mode: VfoMode::from_byte(data[7])?,
            },
            vfo_b: VfoSettings {
                frequency_hz: freq(8),
                mode: VfoMode::from_byte(data[12])?,
            },
        })
    }
}

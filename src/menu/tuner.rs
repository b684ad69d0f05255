//! Knob tuning of the active VFO.

use crate::config::{THRESHOLD_USB_LSB, TUNE_STEP_HZ};
use crate::panel::FrequencySource;
use crate::settings::VfoMode;

/// What a call to [`Tuner::tune`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tuned {
    /// Nothing to do; the radio already runs the cached frequency.
    Idle,
    /// Frequency written. `mode_changed` is set when the sideband flipped.
    Retuned { mode_changed: bool },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Tuner {
    cached_hz: u32,
}

impl Tuner {
    pub const fn new() -> Self {
        Self { cached_hz: 0 }
    }

    pub fn cached_hz(&self) -> u32 {
        self.cached_hz
    }

    pub fn tune<IO: FrequencySource>(&mut self, io: &mut IO, knob: i16) -> Tuned {
        let current = io.active_frequency();
        if knob == 0 && current == self.cached_hz {
            return Tuned::Idle;
        }

        // Something else (VFO swap, band jump) may have moved the radio.
        self.cached_hz = current;
        let new_hz = step_frequency(current, knob);

        let mode_changed = match sideband_crossing(current, new_hz) {
            Some(mode) if mode != io.active_mode() => {
                info!("Crossed {} Hz, switching to {}", THRESHOLD_USB_LSB, mode);
                io.set_active_mode(mode);
                true
            }
            _ => false,
        };

        io.set_active_frequency(new_hz);
        self.cached_hz = new_hz;
        Tuned::Retuned { mode_changed }
    }
}

/// `current + TUNE_STEP_HZ * knob`, saturating at the `u32` range.
pub fn step_frequency(current: u32, knob: i16) -> u32 {
    let offset = i64::from(TUNE_STEP_HZ) * i64::from(knob);
    (i64::from(current) + offset).clamp(0, i64::from(u32::MAX)) as u32
}

/// Sideband implied by moving from `old_hz` to `new_hz`.
///
/// Two independent boundary tests against the same pair: upward when
/// `old < T <= new`, downward when `old >= T > new`. Landing exactly on
/// the threshold counts as upper sideband. Pairs on the same side of the
/// threshold never change the mode.
pub fn sideband_crossing(old_hz: u32, new_hz: u32) -> Option<VfoMode> {
    let mut mode = None;
    if old_hz < THRESHOLD_USB_LSB && new_hz >= THRESHOLD_USB_LSB {
        mode = Some(VfoMode::Usb);
    }
    if old_hz >= THRESHOLD_USB_LSB && new_hz < THRESHOLD_USB_LSB {
        mode = Some(VfoMode::Lsb);
    }
    mode
}

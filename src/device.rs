//! The panel hardware as seen by the menu core.
//!
//! Owns the display, the settings and their flash storage, and a queue to
//! the buzzer task. The active VFO lives in the settings; there is no
//! synthesizer to program, so tuning only updates that record.

use defmt::warn;
use embassy_futures::block_on;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embedded_storage_async::nor_flash::NorFlash;
use tuner_panel::actions;
use tuner_panel::panel::{
    Activation, Colors, Cue, Feedback, FrequencySource, ItemActions, Screen, SettingsStore,
};
use tuner_panel::registry::{Button, Rect};
use tuner_panel::settings::{Settings, VfoMode};
use tuner_panel::Error;

use crate::buzzer::CUE_QUEUE_DEPTH;
use crate::storage::SettingsStorage;
use crate::ui::display::{self, Display};

pub struct Device<I2C, F> {
    display: Display<I2C>,
    dirty: bool,
    storage: SettingsStorage<F>,
    settings: Settings,
    cues: Sender<'static, CriticalSectionRawMutex, Cue, CUE_QUEUE_DEPTH>,
}

impl<I2C, F> Device<I2C, F>
where
    I2C: embedded_hal::i2c::I2c,
    F: NorFlash,
{
    pub fn new(
        display: Display<I2C>,
        storage: SettingsStorage<F>,
        settings: Settings,
        cues: Sender<'static, CriticalSectionRawMutex, Cue, CUE_QUEUE_DEPTH>,
    ) -> Self {
        Self {
            display,
            dirty: false,
            storage,
            settings,
            cues,
        }
    }

    /// Send the frame buffer to the panel if anything was drawn since the
    /// last flush.
    pub fn flush(&mut self) {
        if !self.dirty {
            return;
        }
        if let Err(e) = display::flush(&mut self.display) {
            warn!("Display flush failed: {}", e);
        }
        self.dirty = false;
    }
}

impl<I2C, F> FrequencySource for Device<I2C, F> {
    fn active_frequency(&self) -> u32 {
        self.settings.active().frequency_hz
    }

    fn set_active_frequency(&mut self, hz: u32) {
        self.settings.active_mut().frequency_hz = hz;
    }

    fn active_mode(&self) -> VfoMode {
        self.settings.active().mode
    }

    fn set_active_mode(&mut self, mode: VfoMode) {
        self.settings.active_mut().mode = mode;
    }
}

impl<I2C, F> Screen for Device<I2C, F>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn render_region(&mut self, label: &str, region: Rect, colors: Colors) {
        display::draw_region(&mut self.display, label, region, colors);
        self.dirty = true;
    }
}

impl<I2C, F> Feedback for Device<I2C, F> {
    fn play_feedback(&mut self, cue: Cue) {
        if self.cues.try_send(cue).is_err() {
            warn!("Cue queue full, dropping {}", cue);
        }
    }
}

impl<I2C, F: NorFlash> SettingsStore for Device<I2C, F> {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn persist_settings(&mut self) -> Result<(), Error> {
        // NVMC writes are blocking underneath, so this completes in place.
        block_on(self.storage.save(&self.settings))
    }
}

impl<I2C, F: NorFlash> ItemActions for Device<I2C, F> {
    fn activate(&mut self, _index: usize, button: &Button) -> Activation {
        actions::apply(self, button.action)
    }
}

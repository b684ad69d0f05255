//! Persistent storage for panel settings.
//!
//! Uses the nRF52840's internal flash via `sequential-storage` crate
//! to keep the settings record (VFOs, sideband, morse menu flag) across
//! power cycles.
//!
//! Storage layout:
//!   - One key-value item holding the encoded `Settings` record.
//!   - Writes append a new copy; `sequential-storage` manages the pages,
//!     wear levelling and GC.

use defmt::{error, info, warn};
use embedded_storage_async::nor_flash::NorFlash;
use sequential_storage::cache::NoCache;
use tuner_panel::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use tuner_panel::settings::{Settings, SETTINGS_RECORD_SIZE};
use tuner_panel::Error;

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the settings record in the map storage.
const KEY_SETTINGS: u8 = 0x01;

/// Scratch buffer for `sequential-storage`: item header plus record.
const SCRATCH_SIZE: usize = 64;

pub struct SettingsStorage<F> {
    flash: F,
}

impl<F: NorFlash> SettingsStorage<F> {
    pub const fn new(flash: F) -> Self {
        Self { flash }
    }

    /// Load settings from flash, falling back to defaults when nothing
    /// usable is stored.
    pub async fn load(&mut self) -> Settings {
        let mut buf = [0u8; SCRATCH_SIZE];

        match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut buf,
            &KEY_SETTINGS,
        )
        .await
        {
            Ok(Some(data)) => match Settings::decode(data) {
                Ok(settings) => {
                    info!("Loaded settings from flash");
                    settings
                }
                Err(e) => {
                    warn!("Stored settings rejected ({}), using defaults", e);
                    Settings::default()
                }
            },
            Ok(None) => {
                info!("No settings in flash, using defaults");
                Settings::default()
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
                Settings::default()
            }
        }
    }

    /// Write the settings record to flash.
    pub async fn save(&mut self, settings: &Settings) -> Result<(), Error> {
        let mut record = [0u8; SETTINGS_RECORD_SIZE];
        let len = settings.encode(&mut record)?;
        let item: &[u8] = &record[..len];
        let mut buf = [0u8; SCRATCH_SIZE];

        sequential_storage::map::store_item::<u8, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut buf,
            &KEY_SETTINGS,
            &item,
        )
        .await
        .map_err(|e| {
            error!("Flash write error: {:?}", defmt::Debug2Format(&e));
            Error::Storage
        })
    }
}

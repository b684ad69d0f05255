//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and tuning
//! constants live here so they can be tuned in one place.

// Menu navigation

/// Raw knob counts per selectable item while in selection mode.
///
/// Encoder transitions are fed in unscaled, so a single detent does not
/// always cross an item boundary.
pub const MENU_KNOB_COUNTS_PER_ITEM: i32 = 10;

/// Index of the submenu opened by the main menu's BAND button.
pub const BANDS_SUBMENU: usize = 0;

// Tuning

/// Frequency change per knob count (Hz).
pub const TUNE_STEP_HZ: u32 = 50;

/// Traditional USB/LSB split. At or above this frequency the radio runs
/// upper sideband, below it lower sideband.
pub const THRESHOLD_USB_LSB: u32 = 10_000_000;

/// Frequency loaded into both VFOs when no settings are stored (Hz).
pub const DEFAULT_FREQUENCY_HZ: u32 = 7_150_000;

// Input timing

/// Main UI loop period (ms). Inputs are drained and dispatched once per tick.
pub const TICK_INTERVAL_MS: u64 = 10;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press is reported as long (ms).
pub const LONG_PRESS_MS: u64 = 600;

/// Encoder pin sampling period (µs).
pub const ENCODER_POLL_US: u64 = 500;

// Display

/// SSD1306 panel size in pixels.
pub const SCREEN_WIDTH: i16 = 128;
pub const SCREEN_HEIGHT: i16 = 64;

// Touch overlay (XPT2046 12-bit counts at the panel edges)

pub const TOUCH_RAW_X_MIN: u16 = 240;
pub const TOUCH_RAW_X_MAX: u16 = 3860;
pub const TOUCH_RAW_Y_MIN: u16 = 300;
pub const TOUCH_RAW_Y_MAX: u16 = 3780;

/// Pressure (Z1) reading above which the panel counts as touched.
pub const TOUCH_PRESSURE_THRESHOLD: u16 = 400;

/// Touch controller polling period (ms).
pub const TOUCH_POLL_MS: u64 = 20;

// Accessibility (morse) feedback

/// Sidetone pitch for morse cues (Hz).
pub const MORSE_TONE_HZ: u32 = 700;

/// Length of one morse unit (ms). 80 ms is about 15 WPM.
pub const MORSE_UNIT_MS: u64 = 80;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// picked in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A      → P0.03
//   Encoder B      → P0.04
//   Encoder push   → P0.28
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Touch SCK      → P1.15
//   Touch MOSI     → P1.13
//   Touch MISO     → P1.14
//   Touch CS       → P1.12
//   Buzzer (PWM)   → P0.29

// Settings storage

/// Flash page index where settings storage starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for settings storage.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;

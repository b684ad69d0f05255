//! Unified error type for tuner-panel.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// Flash read/write/erase failed.
    Storage,

    /// Stored settings record is truncated or holds invalid field values.
    CorruptSettings,

    /// Stored settings record was written by an unknown layout version.
    UnsupportedVersion(u8),

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    /// SPI transaction to the touch controller failed.
    Touch,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

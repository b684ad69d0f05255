//! Front-panel menu core for tuner-panel.
//!
//! Everything here is pure logic that runs on the host as well as on the
//! nRF52840: button registry and hit testing, knob selection, VFO tuning,
//! the submenu delegation chain and the settings record. Hardware sits
//! behind the traits in [`panel`].
//!
//! Usage: `cargo test --lib` / `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and links against this library.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod actions;
pub mod config;
pub mod error;
pub mod menu;
pub mod morse;
pub mod panel;
pub mod registry;
pub mod settings;

// The rest of src/ui/ is firmware-only; pull in the pure part by path.
#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;

pub mod ui {
    pub mod input_logic {
        pub use crate::ui_input_logic_impl::{PressTracker, QuadratureDecoder, TouchCalibration};
    }
}

pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

//! User interface subsystem - OLED display, rotary encoder and touch overlay.
//!
//! Input tasks sample hardware and hand conditioned events to the UI loop
//! in `main.rs`, which drains them once per tick into a `TickInput`.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Encoder**: quadrature knob with push switch (short / long press)
//! - **Touch**: XPT2046 resistive controller via SPI

pub mod buttons;
pub mod display;
pub mod encoder;
pub mod touch;

use defmt::Format;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use tuner_panel::menu::ButtonPress;
use tuner_panel::registry::Point;

/// Depth of the input event queues. The UI loop drains one event per tick.
pub const EVENT_QUEUE_DEPTH: usize = 4;

/// A completed touch gesture, located where the finger first landed.
#[derive(Clone, Copy, PartialEq, Eq, Format)]
pub struct TouchEvent {
    pub press: ButtonPress,
    pub point: Point,
}

pub type ButtonChannel = Channel<CriticalSectionRawMutex, ButtonPress, EVENT_QUEUE_DEPTH>;
pub type TouchChannel = Channel<CriticalSectionRawMutex, TouchEvent, EVENT_QUEUE_DEPTH>;

/// Tuner (encoder push) button presses.
pub static BUTTON_EVENTS: ButtonChannel = Channel::new();

/// Touch overlay presses.
pub static TOUCH_EVENTS: TouchChannel = Channel::new();

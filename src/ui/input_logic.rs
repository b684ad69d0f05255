//! Pure input conditioning: press duration, quadrature decoding and
//! touch calibration. The firmware tasks feed raw pin levels and
//! controller counts through these.

use crate::config::{LONG_PRESS_MS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::menu::ButtonPress;
use crate::registry::Point;

/// Turns debounced button levels into short/long press events.
///
/// A long press fires as soon as the hold time is reached, so the user
/// gets feedback without letting go. The release that follows is swallowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PressTracker {
    pressed_at: Option<u64>,
    long_fired: bool,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self {
            pressed_at: None,
            long_fired: false,
        }
    }

    pub fn update(&mut self, pressed: bool, now_ms: u64) -> ButtonPress {
        match (self.pressed_at, pressed) {
            (None, true) => {
                self.pressed_at = Some(now_ms);
                self.long_fired = false;
                ButtonPress::None
            }
            (Some(start), true) => {
                if !self.long_fired && now_ms.saturating_sub(start) >= LONG_PRESS_MS {
                    self.long_fired = true;
                    ButtonPress::Long
                } else {
                    ButtonPress::None
                }
            }
            (Some(_), false) => {
                self.pressed_at = None;
                if self.long_fired {
                    ButtonPress::None
                } else {
                    ButtonPress::Short
                }
            }
            (None, false) => ButtonPress::None,
        }
    }
}

// Index: (prev << 2) | curr, values are +1/-1 for valid transitions.
const QUADRATURE_TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

/// Full-resolution quadrature decoder: one count per valid edge.
#[derive(Clone, Copy, Debug)]
pub struct QuadratureDecoder {
    prev_ab: u8,
}

impl QuadratureDecoder {
    pub fn new(a_high: bool, b_high: bool) -> Self {
        Self {
            prev_ab: ab_from_levels(a_high, b_high),
        }
    }

    /// Feed the current pin levels. Returns -1, 0 or +1.
    pub fn update(&mut self, a_high: bool, b_high: bool) -> i8 {
        let curr = ab_from_levels(a_high, b_high);
        let step = QUADRATURE_TRANSITIONS[((self.prev_ab << 2) | curr) as usize];
        self.prev_ab = curr;
        step
    }
}

fn ab_from_levels(a_high: bool, b_high: bool) -> u8 {
    ((a_high as u8) << 1) | b_high as u8
}

/// Linear map from touch controller counts to screen pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchCalibration {
    pub x_min: u16,
    pub x_max: u16,
    pub y_min: u16,
    pub y_max: u16,
}

impl TouchCalibration {
    /// Map raw counts to a point, clamped to the screen.
    pub fn map(&self, raw_x: u16, raw_y: u16) -> Point {
        Point::new(
            scale(raw_x, self.x_min, self.x_max, SCREEN_WIDTH),
            scale(raw_y, self.y_min, self.y_max, SCREEN_HEIGHT),
        )
    }
}

fn scale(raw: u16, min: u16, max: u16, extent: i16) -> i16 {
    if max <= min {
        return 0;
    }
    let raw = raw.clamp(min, max);
    let span = i32::from(max - min);
    let pos = i32::from(raw - min) * i32::from(extent - 1) / span;
    pos as i16
}

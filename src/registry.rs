//! On-screen button catalogue and touch hit testing.
//!
//! Registries are plain `static` arrays. Their order defines the visual
//! layout, the knob selection order, and the item indices used by the
//! menus. Regions are disjoint; where they would overlap the first match
//! wins.

/// Screen coordinate in display pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive containment: `x ∈ [x, x + w]`, `y ∈ [y, y + h]`.
    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = (i32::from(p.x), i32::from(p.y));
        let (x0, y0) = (i32::from(self.x), i32::from(self.y));
        px >= x0 && px <= x0 + i32::from(self.w) && py >= y0 && py <= y0 + i32::from(self.h)
    }
}

/// What a button does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Make VFO A the active VFO (its region doubles as the frequency readout).
    VfoA,
    /// Make VFO B the active VFO.
    VfoB,
    /// Force upper sideband.
    Usb,
    /// Force lower sideband.
    Lsb,
    /// Open the band quick-select submenu.
    Bands,
    /// Jump to the bottom edge of an amateur band.
    Band { start_hz: u32 },
}

/// A selectable on-screen region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub region: Rect,
    /// Character spelled out in morse when the button is highlighted.
    pub symbol: char,
    pub action: ButtonAction,
}

impl Button {
    pub const fn new(
        label: &'static str,
        region: Rect,
        symbol: char,
        action: ButtonAction,
    ) -> Self {
        Self {
            label,
            region,
            symbol,
            action,
        }
    }
}

/// Number of buttons on the main menu.
pub const MAIN_MENU_NUM_BUTTONS: usize = 5;

/// Main menu. Entry 0 is the VFO readout that tuning redraws.
pub static MAIN_MENU_BUTTONS: [Button; MAIN_MENU_NUM_BUTTONS] = [
    Button::new("VFO A", Rect::new(0, 0, 62, 20), 'A', ButtonAction::VfoA),
    Button::new("VFO B", Rect::new(65, 0, 62, 20), 'B', ButtonAction::VfoB),
    Button::new("USB", Rect::new(0, 23, 40, 18), 'U', ButtonAction::Usb),
    Button::new("LSB", Rect::new(43, 23, 40, 18), 'L', ButtonAction::Lsb),
    Button::new("BAND", Rect::new(86, 23, 41, 18), 'N', ButtonAction::Bands),
];

/// Number of entries in the band quick-select submenu.
pub const BAND_NUM_BUTTONS: usize = 6;

pub static BAND_BUTTONS: [Button; BAND_NUM_BUTTONS] = [
    Button::new("80m", Rect::new(0, 0, 40, 30), '8', ButtonAction::Band { start_hz: 3_500_000 }),
    Button::new("40m", Rect::new(43, 0, 40, 30), '4', ButtonAction::Band { start_hz: 7_000_000 }),
    Button::new("30m", Rect::new(86, 0, 41, 30), '3', ButtonAction::Band { start_hz: 10_100_000 }),
    Button::new("20m", Rect::new(0, 33, 40, 30), '2', ButtonAction::Band { start_hz: 14_000_000 }),
    Button::new("17m", Rect::new(43, 33, 40, 30), '7', ButtonAction::Band { start_hz: 18_068_000 }),
    Button::new("15m", Rect::new(86, 33, 41, 30), '5', ButtonAction::Band { start_hz: 21_000_000 }),
];

/// Find the first button whose region contains `point`.
pub fn find_pressed_button(buttons: &[Button], point: Point) -> Option<usize> {
    buttons.iter().position(|b| b.region.contains(point))
}

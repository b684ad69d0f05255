//! SSD1306 OLED display wrapper.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;
use tuner_panel::panel::{Colors, Ink};
use tuner_panel::registry::Rect;
use tuner_panel::Error;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    let _ = display.init();
    display.clear_buffer();
    let _ = display.flush();
    display
}

fn ink(ink: Ink) -> BinaryColor {
    match ink {
        Ink::Off => BinaryColor::Off,
        Ink::On => BinaryColor::On,
    }
}

fn text_style(color: BinaryColor) -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(color)
        .build()
}

/// Paint one button into the frame buffer: filled background, one pixel
/// border and the label centred. Regions are inclusive of `x + w`, `y + h`.
pub fn draw_region<I2C>(display: &mut Display<I2C>, label: &str, region: Rect, colors: Colors)
where
    I2C: embedded_hal::i2c::I2c,
{
    let top_left = Point::new(i32::from(region.x), i32::from(region.y));
    let size = Size::new(u32::from(region.w) + 1, u32::from(region.h) + 1);
    let rect = Rectangle::new(top_left, size);

    let style = PrimitiveStyleBuilder::new()
        .fill_color(ink(colors.background))
        .stroke_color(ink(colors.border))
        .stroke_width(1)
        .build();
    let _ = rect.into_styled(style).draw(display);

    if label.is_empty() {
        return;
    }
    let centred = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    let _ = Text::with_text_style(label, rect.center(), text_style(ink(colors.text)), centred)
        .draw(display);
}

/// Push the frame buffer to the panel.
pub fn flush<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.flush().map_err(|_| Error::Display)
}

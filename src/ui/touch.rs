//! XPT2046 resistive touch controller.
//!
//! 12-bit differential conversions over SPI. A touch is reported while
//! the Z1 pressure reading exceeds `TOUCH_PRESSURE_THRESHOLD`.

use crate::ui::{TouchEvent, EVENT_QUEUE_DEPTH};
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi::SpiBus;
use tuner_panel::config::{
    TOUCH_POLL_MS, TOUCH_PRESSURE_THRESHOLD, TOUCH_RAW_X_MAX, TOUCH_RAW_X_MIN, TOUCH_RAW_Y_MAX,
    TOUCH_RAW_Y_MIN,
};
use tuner_panel::menu::ButtonPress;
use tuner_panel::registry::Point;
use tuner_panel::ui::input_logic::{PressTracker, TouchCalibration};
use tuner_panel::Error;

// Control bytes: start bit, channel, 12-bit, differential, power-down between conversions.
const CMD_X: u8 = 0xD0;
const CMD_Y: u8 = 0x90;
const CMD_Z1: u8 = 0xB0;

pub const CALIBRATION: TouchCalibration = TouchCalibration {
    x_min: TOUCH_RAW_X_MIN,
    x_max: TOUCH_RAW_X_MAX,
    y_min: TOUCH_RAW_Y_MIN,
    y_max: TOUCH_RAW_Y_MAX,
};

pub struct Xpt2046<SPI, CS> {
    spi: SPI,
    cs: CS,
    calibration: TouchCalibration,
}

impl<SPI, CS> Xpt2046<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS, calibration: TouchCalibration) -> Self {
        Self {
            spi,
            cs,
            calibration,
        }
    }

    /// Screen point under the finger, or `None` when not touched.
    pub async fn sample(&mut self) -> Result<Option<Point>, Error> {
        let z1 = self.read_channel(CMD_Z1).await?;
        if z1 < TOUCH_PRESSURE_THRESHOLD {
            return Ok(None);
        }
        let raw_x = self.read_channel(CMD_X).await?;
        let raw_y = self.read_channel(CMD_Y).await?;
        Ok(Some(self.calibration.map(raw_x, raw_y)))
    }

    async fn read_channel(&mut self, command: u8) -> Result<u16, Error> {
        let mut frame = [command, 0, 0];
        self.cs.set_low().map_err(|_| Error::Touch)?;
        let result = self.spi.transfer_in_place(&mut frame).await;
        self.cs.set_high().map_err(|_| Error::Touch)?;
        result.map_err(|_| Error::Touch)?;
        // Result is left-aligned: 7 bits in the second byte, 5 in the third.
        Ok(((u16::from(frame[1]) << 5) | (u16::from(frame[2]) >> 3)) & 0x0FFF)
    }
}

/// Poll the controller and emit one event per gesture.
pub async fn touch_task<SPI, CS>(
    mut touch: Xpt2046<SPI, CS>,
    tx: Sender<'static, CriticalSectionRawMutex, TouchEvent, EVENT_QUEUE_DEPTH>,
) -> !
where
    SPI: SpiBus,
    CS: OutputPin,
{
    let mut tracker = PressTracker::new();
    let mut landed_at = Point::default();
    let mut was_touched = false;
    let mut ticker = Ticker::every(Duration::from_millis(TOUCH_POLL_MS));

    loop {
        ticker.next().await;
        let point = match touch.sample().await {
            Ok(point) => point,
            Err(e) => {
                warn!("Touch read failed: {}", e);
                None
            }
        };

        if let (Some(p), false) = (point, was_touched) {
            landed_at = p;
        }
        was_touched = point.is_some();

        let press = tracker.update(was_touched, Instant::now().as_millis());
        if press != ButtonPress::None {
            info!("Touch: {} at ({}, {})", press, landed_at.x, landed_at.y);
            tx.send(TouchEvent {
                press,
                point: landed_at,
            })
            .await;
        }
    }
}

//! Rotary encoder sampling.
//!
//! Both phases are polled at a fixed rate and decoded at full resolution.
//! Counts accumulate in an atomic that the UI loop takes once per tick.

use core::sync::atomic::{AtomicI32, Ordering};

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::{Duration, Ticker};
use tuner_panel::config::ENCODER_POLL_US;
use tuner_panel::ui::input_logic::QuadratureDecoder;

static ENCODER_COUNT: AtomicI32 = AtomicI32::new(0);

pub async fn encoder_task(pin_a: AnyPin, pin_b: AnyPin) -> ! {
    let a = Input::new(pin_a, Pull::Up);
    let b = Input::new(pin_b, Pull::Up);
    let mut decoder = QuadratureDecoder::new(a.is_high(), b.is_high());
    let mut ticker = Ticker::every(Duration::from_micros(ENCODER_POLL_US));

    loop {
        ticker.next().await;
        let step = decoder.update(a.is_high(), b.is_high());
        if step != 0 {
            ENCODER_COUNT.fetch_add(i32::from(step), Ordering::Relaxed);
        }
    }
}

/// Counts since the previous call, saturated to the tick input range.
pub fn take_delta() -> i16 {
    let counts = ENCODER_COUNT.swap(0, Ordering::Relaxed);
    counts.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

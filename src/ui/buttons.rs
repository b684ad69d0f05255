//! Encoder push switch with async debouncing and long-press detection.
//!
//! The switch is active-low with the internal pull-up. The task sleeps on
//! a falling edge, debounces it, then samples the level every tick while
//! held so a long press fires without waiting for release.

use crate::ui::EVENT_QUEUE_DEPTH;
use defmt::{debug, info};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};
use tuner_panel::config::{BUTTON_DEBOUNCE_MS, TICK_INTERVAL_MS};
use tuner_panel::menu::ButtonPress;
use tuner_panel::ui::input_logic::PressTracker;

/// Run the push-switch loop forever.
pub async fn button_task(
    pin: AnyPin,
    tx: Sender<'static, CriticalSectionRawMutex, ButtonPress, EVENT_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    let mut tracker = PressTracker::new();

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if btn.is_high() {
            debug!("Button: bounce ignored");
            continue;
        }

        tracker.update(true, Instant::now().as_millis());
        loop {
            Timer::after(Duration::from_millis(TICK_INTERVAL_MS)).await;
            let held = btn.is_low();
            let press = tracker.update(held, Instant::now().as_millis());
            if press != ButtonPress::None {
                info!("Button: {}", press);
                tx.send(press).await;
            }
            if !held {
                break;
            }
        }

        // Let the contacts settle before arming the next edge.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}

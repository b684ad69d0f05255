//! Piezo buzzer: plays accessibility cues as morse sidetone.
//!
//! Cues are queued by the UI loop and played here so a long pattern never
//! stalls input handling.

use defmt::{debug, warn};
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{Duration, Timer};
use tuner_panel::config::{MORSE_TONE_HZ, MORSE_UNIT_MS};
use tuner_panel::morse;
use tuner_panel::panel::Cue;

pub const CUE_QUEUE_DEPTH: usize = 4;

pub type CueChannel = Channel<CriticalSectionRawMutex, Cue, CUE_QUEUE_DEPTH>;

pub static CUES: CueChannel = Channel::new();

/// Silence between two queued cues, in morse units (inter-letter gap).
const CUE_GAP_UNITS: u64 = 3;

pub async fn buzzer_task(
    mut pwm: SimplePwm<'static, PWM0>,
    rx: Receiver<'static, CriticalSectionRawMutex, Cue, CUE_QUEUE_DEPTH>,
) -> ! {
    pwm.set_period(MORSE_TONE_HZ);
    pwm.set_duty(0, 0);

    loop {
        let cue = rx.receive().await;
        let Some(pattern) = morse::cue_pattern(cue) else {
            warn!("No morse for cue {}", cue);
            continue;
        };
        debug!("Buzzer: {} -> {}", cue, pattern);

        for (tone_on, units) in morse::timeline(pattern) {
            let duty = if tone_on { pwm.max_duty() / 2 } else { 0 };
            pwm.set_duty(0, duty);
            Timer::after(Duration::from_millis(u64::from(units) * MORSE_UNIT_MS)).await;
        }
        pwm.set_duty(0, 0);
        Timer::after(Duration::from_millis(CUE_GAP_UNITS * MORSE_UNIT_MS)).await;
    }
}

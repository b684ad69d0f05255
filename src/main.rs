//! tuner-panel firmware - transceiver front panel on nRF52840.
//!
//! Tasks:
//!   - encoder: samples the quadrature knob
//!   - button:  encoder push switch, short / long press
//!   - touch:   XPT2046 overlay, short / long touch
//!   - buzzer:  morse accessibility cues
//!   - main:    UI loop, drains inputs every tick into the menu

#![no_std]
#![no_main]

mod buzzer;
mod device;
mod storage;
mod ui;

use defmt::{info, unwrap};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::peripherals::{PWM0, SPI3, TWISPI0};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::spim::{self, Spim};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use tuner_panel::config::TICK_INTERVAL_MS;
use tuner_panel::menu::band_menu::BandMenu;
use tuner_panel::menu::main_menu::MainMenu;
use tuner_panel::menu::{Menu, TickInput};
use tuner_panel::registry::MAIN_MENU_BUTTONS;

use {defmt_rtt as _, panic_probe as _};

use crate::buzzer::CUES;
use crate::device::Device;
use crate::storage::SettingsStorage;
use crate::ui::touch::{Xpt2046, CALIBRATION};
use crate::ui::{BUTTON_EVENTS, TOUCH_EVENTS};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

type PanelDevice = Device<Twim<'static, TWISPI0>, BlockingAsync<Nvmc<'static>>>;
type TouchPanel = Xpt2046<Spim<'static, SPI3>, Output<'static>>;

static BAND_MENU: StaticCell<BandMenu> = StaticCell::new();
static SUBMENUS: StaticCell<[&'static mut dyn Menu<PanelDevice>; 1]> = StaticCell::new();

#[embassy_executor::task]
async fn encoder_task(a: AnyPin, b: AnyPin) {
    ui::encoder::encoder_task(a, b).await
}

#[embassy_executor::task]
async fn button_task(pin: AnyPin) {
    ui::buttons::button_task(pin, BUTTON_EVENTS.sender()).await
}

#[embassy_executor::task]
async fn touch_task(touch: TouchPanel) {
    ui::touch::touch_task(touch, TOUCH_EVENTS.sender()).await
}

#[embassy_executor::task]
async fn buzzer_task(pwm: SimplePwm<'static, PWM0>) {
    buzzer::buzzer_task(pwm, CUES.receiver()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("tuner-panel starting");

    // Display
    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let display = ui::display::init(i2c);

    // Settings
    let mut storage = SettingsStorage::new(BlockingAsync::new(Nvmc::new(p.NVMC)));
    let settings = storage.load().await;
    info!("Settings: {}", settings);

    // Touch overlay
    let mut spi_config = spim::Config::default();
    spi_config.frequency = spim::Frequency::M2;
    let spi = Spim::new(p.SPI3, Irqs, p.P1_15, p.P1_14, p.P1_13, spi_config);
    let cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let touch = Xpt2046::new(spi, cs, CALIBRATION);

    // Buzzer
    let pwm = SimplePwm::new_1ch(p.PWM0, p.P0_29);

    unwrap!(spawner.spawn(encoder_task(p.P0_03.degrade(), p.P0_04.degrade())));
    unwrap!(spawner.spawn(button_task(p.P0_28.degrade())));
    unwrap!(spawner.spawn(touch_task(touch)));
    unwrap!(spawner.spawn(buzzer_task(pwm)));

    let mut device: PanelDevice = Device::new(display, storage, settings, CUES.sender());

    let band_menu: &'static mut dyn Menu<PanelDevice> = BAND_MENU.init(BandMenu::new());
    let submenus = SUBMENUS.init([band_menu]);
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, submenus);

    menu.draw(&mut device);
    device.flush();
    info!("UI ready");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        ticker.next().await;

        let mut input = TickInput {
            tuner_button: BUTTON_EVENTS.try_receive().unwrap_or_default(),
            knob: ui::encoder::take_delta(),
            ..TickInput::default()
        };
        if let Ok(touch) = TOUCH_EVENTS.try_receive() {
            input.touch_button = touch.press;
            input.touch_point = touch.point;
        }

        menu.process_tick(&mut device, &input);
        device.flush();
    }
}

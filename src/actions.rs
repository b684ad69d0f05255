//! Default button behaviour used by the firmware's `ItemActions`.

use crate::config::BANDS_SUBMENU;
use crate::panel::{persist, Activation, FrequencySource, SettingsStore};
use crate::registry::ButtonAction;
use crate::settings::{Vfo, VfoMode};

pub fn apply<IO>(io: &mut IO, action: ButtonAction) -> Activation
where
    IO: FrequencySource + SettingsStore,
{
    match action {
        ButtonAction::VfoA => select_vfo(io, Vfo::A),
        ButtonAction::VfoB => select_vfo(io, Vfo::B),
        ButtonAction::Usb => set_mode(io, VfoMode::Usb),
        ButtonAction::Lsb => set_mode(io, VfoMode::Lsb),
        ButtonAction::Bands => return Activation::OpenSubmenu(BANDS_SUBMENU),
        ButtonAction::Band { start_hz } => {
            info!("Band jump to {} Hz", start_hz);
            io.set_active_frequency(start_hz);
            io.set_active_mode(VfoMode::for_frequency(start_hz));
            persist(io);
        }
    }
    Activation::Done
}

fn select_vfo<IO: SettingsStore>(io: &mut IO, vfo: Vfo) {
    if io.settings().active_vfo == vfo {
        return;
    }
    info!("Active VFO -> {}", vfo);
    io.settings_mut().active_vfo = vfo;
    persist(io);
}

fn set_mode<IO: FrequencySource + SettingsStore>(io: &mut IO, mode: VfoMode) {
    if io.active_mode() == mode {
        return;
    }
    io.set_active_mode(mode);
    persist(io);
}

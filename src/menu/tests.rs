//! Unit tests for selection, tuning and menu dispatch.
//!
//! These tests run on the host against a recording mock of the panel
//! hardware and check the observable side effects of each tick.

use super::band_menu::BandMenu;
use super::main_menu::MainMenu;
use super::selector::{Crossing, Selector};
use super::tuner::{sideband_crossing, step_frequency, Tuned, Tuner};
use super::{ButtonPress, Menu, MenuStatus, TickInput};
use crate::actions;
use crate::error::Error;
use crate::panel::{
    Activation, Colors, Cue, Feedback, FrequencySource, ItemActions, Screen, SettingsStore,
    COLORS_SELECTED,
};
use crate::registry::{Button, Point, Rect, MAIN_MENU_BUTTONS};
use crate::settings::{Settings, Vfo, VfoMode};

// ═══════════════════════════════════════════════════════════════════════════
// Mock Panel
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Render {
        label: std::string::String,
        region: Rect,
        colors: Colors,
    },
    Feedback(Cue),
    Persist,
    Activate(usize),
    SetFrequency(u32),
    SetMode(VfoMode),
    SubmenuInit,
    SubmenuTick,
}

struct MockPanel {
    settings: Settings,
    events: Vec<Event>,
    persist_fails: bool,
    forced_activation: Option<Activation>,
}

impl MockPanel {
    fn new() -> Self {
        Self {
            settings: Settings::new(),
            events: Vec::new(),
            persist_fails: false,
            forced_activation: None,
        }
    }

    fn with_morse() -> Self {
        let mut panel = Self::new();
        panel.settings.morse_menu_on = true;
        panel
    }

    fn tuned_to(hz: u32) -> Self {
        let mut panel = Self::new();
        panel.settings.active_mut().frequency_hz = hz;
        panel.settings.active_mut().mode = VfoMode::for_frequency(hz);
        panel
    }

    fn feedback(&self) -> Vec<Cue> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Feedback(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    fn count(&self, wanted: &Event) -> usize {
        self.events.iter().filter(|e| *e == wanted).count()
    }

    fn rendered(&self, label: &str) -> Vec<Colors> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Render { label: l, colors, .. } if l == label => Some(*colors),
                _ => None,
            })
            .collect()
    }

    fn renders(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Render { .. }))
            .count()
    }

    fn frequency_writes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::SetFrequency(_)))
            .count()
    }
}

impl FrequencySource for MockPanel {
    fn active_frequency(&self) -> u32 {
        self.settings.active().frequency_hz
    }

    fn set_active_frequency(&mut self, hz: u32) {
        self.events.push(Event::SetFrequency(hz));
        self.settings.active_mut().frequency_hz = hz;
    }

    fn active_mode(&self) -> VfoMode {
        self.settings.active().mode
    }

    fn set_active_mode(&mut self, mode: VfoMode) {
        self.events.push(Event::SetMode(mode));
        self.settings.active_mut().mode = mode;
    }
}

impl Screen for MockPanel {
    fn render_region(&mut self, label: &str, region: Rect, colors: Colors) {
        self.events.push(Event::Render {
            label: label.into(),
            region,
            colors,
        });
    }
}

impl Feedback for MockPanel {
    fn play_feedback(&mut self, cue: Cue) {
        self.events.push(Event::Feedback(cue));
    }
}

impl SettingsStore for MockPanel {
    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    fn persist_settings(&mut self) -> Result<(), Error> {
        self.events.push(Event::Persist);
        if self.persist_fails {
            Err(Error::Storage)
        } else {
            Ok(())
        }
    }
}

impl ItemActions for MockPanel {
    fn activate(&mut self, index: usize, button: &Button) -> Activation {
        self.events.push(Event::Activate(index));
        match self.forced_activation {
            Some(activation) => activation,
            None => actions::apply(self, button.action),
        }
    }
}

/// Submenu that replays a fixed list of statuses, one per tick.
struct ScriptedMenu {
    script: &'static [MenuStatus],
    cursor: usize,
}

impl ScriptedMenu {
    const fn new(script: &'static [MenuStatus]) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Menu<MockPanel> for ScriptedMenu {
    fn init(&mut self, io: &mut MockPanel) {
        io.events.push(Event::SubmenuInit);
    }

    fn run_menu(&mut self, io: &mut MockPanel, _input: &TickInput) -> MenuStatus {
        io.events.push(Event::SubmenuTick);
        let status = self
            .script
            .get(self.cursor)
            .copied()
            .unwrap_or(MenuStatus::StillActive);
        self.cursor += 1;
        status
    }
}

fn idle() -> TickInput {
    TickInput::default()
}

fn knob(delta: i16) -> TickInput {
    TickInput {
        knob: delta,
        ..TickInput::default()
    }
}

fn tuner(press: ButtonPress) -> TickInput {
    TickInput {
        tuner_button: press,
        ..TickInput::default()
    }
}

fn touch(x: i16, y: i16) -> TickInput {
    TickInput {
        touch_button: ButtonPress::Short,
        touch_point: Point::new(x, y),
        ..TickInput::default()
    }
}

/// Point inside the BAND button.
const BAND_BUTTON: (i16, i16) = (120, 30);

// ═══════════════════════════════════════════════════════════════════════════
// Selector
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn selector_crosses_item_boundary_and_clamps_without_wrapping() {
    let mut sel = Selector::new(10);

    assert_eq!(sel.step(8, 3), None);
    assert_eq!(sel.raw_position(), 8);

    assert_eq!(sel.step(5, 3), Some(Crossing { from: 0, to: 1 }));
    assert_eq!(sel.raw_position(), 13);

    assert_eq!(sel.step(50, 3), Some(Crossing { from: 1, to: 2 }));
    assert_eq!(sel.raw_position(), 29);
    assert_eq!(sel.selected_item(), 2);

    // Pinned at the last item; rotating further never wraps to item 0.
    assert_eq!(sel.step(5, 3), None);
    assert_eq!(sel.raw_position(), 29);

    assert_eq!(sel.step(-100, 3), Some(Crossing { from: 2, to: 0 }));
    assert_eq!(sel.raw_position(), 0);
    assert_eq!(sel.step(-1, 3), None);
    assert_eq!(sel.raw_position(), 0);
}

#[test]
fn selector_raw_position_always_in_range() {
    let mut sel = Selector::new(10);
    for delta in [
        1, -3, 17, 250, i16::MAX, -7, i16::MIN, 0, 9, 31, -12, 44, i16::MAX, 5,
    ] {
        sel.step(delta, 4);
        assert!((0..40).contains(&sel.raw_position()), "raw {}", sel.raw_position());
    }
}

#[test]
fn selector_moves_within_one_item_are_silent() {
    let mut sel = Selector::new(10);
    sel.step(10, 3);
    for delta in [1, 2, 3, -4, 5, -1] {
        assert_eq!(sel.step(delta, 3), None);
    }
    assert_eq!(sel.selected_item(), 1);
}

#[test]
fn selector_zero_delta_is_noop() {
    let mut sel = Selector::new(10);
    sel.step(14, 3);
    assert_eq!(sel.step(0, 3), None);
    assert_eq!(sel.raw_position(), 14);

    let mut io = MockPanel::with_morse();
    let mut draws = 0;
    sel.adjust(&mut io, &MAIN_MENU_BUTTONS[..3], 0, |_, _, _| draws += 1);
    assert_eq!(draws, 0);
    assert!(io.events.is_empty());
}

#[test]
fn selector_empty_registry_never_moves() {
    let mut sel = Selector::new(10);
    assert_eq!(sel.step(5, 0), None);
    assert_eq!(sel.raw_position(), 0);
}

#[test]
fn selector_adjust_moves_highlight_and_announces_once() {
    let buttons = &MAIN_MENU_BUTTONS[..3];
    let mut sel = Selector::new(10);
    let mut io = MockPanel::with_morse();
    let mut draws = Vec::new();

    sel.begin_selecting(&mut io, buttons, |_, i, hl| draws.push((i, hl)));
    assert_eq!(draws, vec![(0, true)]);
    assert_eq!(io.feedback(), vec![Cue::Symbol('A')]);

    draws.clear();
    io.events.clear();
    sel.adjust(&mut io, buttons, 13, |_, i, hl| draws.push((i, hl)));
    assert_eq!(draws, vec![(0, false), (1, true)]);
    assert_eq!(io.feedback(), vec![Cue::Symbol('B')]);

    draws.clear();
    io.events.clear();
    sel.adjust(&mut io, buttons, 3, |_, i, hl| draws.push((i, hl)));
    assert!(draws.is_empty());
    assert!(io.feedback().is_empty());
}

#[test]
fn selector_feedback_muted_when_morse_menu_off() {
    let buttons = &MAIN_MENU_BUTTONS[..3];
    let mut sel = Selector::new(10);
    let mut io = MockPanel::new();
    let mut draws = 0;

    sel.begin_selecting(&mut io, buttons, |_, _, _| draws += 1);
    sel.adjust(&mut io, buttons, 25, |_, _, _| draws += 1);

    assert_eq!(draws, 3);
    assert!(io.feedback().is_empty());
}

#[test]
fn selector_begin_resets_raw_position() {
    let buttons = &MAIN_MENU_BUTTONS[..3];
    let mut sel = Selector::new(10);
    let mut io = MockPanel::new();
    sel.step(22, 3);

    sel.begin_selecting(&mut io, buttons, |_, _, _| {});
    assert!(sel.is_selecting());
    assert_eq!(sel.raw_position(), 0);

    sel.step(15, 3);
    let item = sel.end_selecting(&mut io, buttons, |_, _, _| {});
    assert_eq!(item, 1);
    assert!(!sel.is_selecting());
}

// ═══════════════════════════════════════════════════════════════════════════
// Tuner
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tune_idle_tick_does_nothing_once_synced() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(7_074_000);

    // First tick resyncs the cache with the radio.
    assert_eq!(tuner.tune(&mut io, 0), Tuned::Retuned { mode_changed: false });
    assert_eq!(io.active_frequency(), 7_074_000);

    io.events.clear();
    assert_eq!(tuner.tune(&mut io, 0), Tuned::Idle);
    assert!(io.events.is_empty());
}

#[test]
fn tune_applies_uniform_step() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(7_074_000);

    tuner.tune(&mut io, 3);
    assert_eq!(io.active_frequency(), 7_074_150);
    tuner.tune(&mut io, -7);
    assert_eq!(io.active_frequency(), 7_073_800);
    assert_eq!(tuner.cached_hz(), 7_073_800);
}

#[test]
fn tune_resyncs_after_external_change() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(7_074_000);
    tuner.tune(&mut io, 1);

    // VFO swap or band jump behind the tuner's back.
    io.settings.active_mut().frequency_hz = 14_074_000;
    tuner.tune(&mut io, 2);
    assert_eq!(io.active_frequency(), 14_074_100);
}

#[test]
fn tune_onto_threshold_switches_to_usb() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(9_999_950);
    assert_eq!(io.active_mode(), VfoMode::Lsb);

    assert_eq!(tuner.tune(&mut io, 1), Tuned::Retuned { mode_changed: true });
    assert_eq!(io.active_frequency(), 10_000_000);
    assert_eq!(io.active_mode(), VfoMode::Usb);
}

#[test]
fn tune_one_step_past_threshold_switches_to_usb() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(9_999_950);

    assert_eq!(tuner.tune(&mut io, 2), Tuned::Retuned { mode_changed: true });
    assert_eq!(io.active_frequency(), 10_000_050);
    assert_eq!(io.active_mode(), VfoMode::Usb);
}

#[test]
fn tune_down_from_threshold_switches_to_lsb() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(10_000_000);
    assert_eq!(io.active_mode(), VfoMode::Usb);

    assert_eq!(tuner.tune(&mut io, -1), Tuned::Retuned { mode_changed: true });
    assert_eq!(io.active_frequency(), 9_999_950);
    assert_eq!(io.active_mode(), VfoMode::Lsb);
}

#[test]
fn tune_same_side_keeps_mode() {
    let mut tuner = Tuner::new();
    let mut io = MockPanel::tuned_to(10_000_050);
    // User forced LSB above the split; tuning above it must not undo that.
    io.settings.active_mut().mode = VfoMode::Lsb;

    assert_eq!(tuner.tune(&mut io, 20), Tuned::Retuned { mode_changed: false });
    assert_eq!(io.active_mode(), VfoMode::Lsb);
    assert_eq!(io.count(&Event::SetMode(VfoMode::Usb)), 0);
}

#[test]
fn sideband_crossing_checks_only_endpoints() {
    const T: u32 = 10_000_000;
    assert_eq!(sideband_crossing(T - 50, T), Some(VfoMode::Usb));
    assert_eq!(sideband_crossing(T - 1, T + 1), Some(VfoMode::Usb));
    assert_eq!(sideband_crossing(T, T - 1), Some(VfoMode::Lsb));
    assert_eq!(sideband_crossing(T + 500, T - 500), Some(VfoMode::Lsb));
    assert_eq!(sideband_crossing(T, T + 50), None);
    assert_eq!(sideband_crossing(T - 100, T - 50), None);
    assert_eq!(sideband_crossing(T - 50, T - 50), None);
}

#[test]
fn step_frequency_saturates_at_range_limits() {
    assert_eq!(step_frequency(100, 2), 200);
    assert_eq!(step_frequency(10, -1), 0);
    assert_eq!(step_frequency(u32::MAX - 10, 1), u32::MAX);
}

// ═══════════════════════════════════════════════════════════════════════════
// Main Menu Dispatch
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn short_press_enters_selection_on_first_item() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    assert_eq!(menu.process_tick(&mut io, &tuner(ButtonPress::Short)), MenuStatus::StillActive);
    assert!(menu.is_selecting());
    assert_eq!(menu.selector().raw_position(), 0);
    assert_eq!(io.feedback(), vec![Cue::Symbol('A')]);
    assert_eq!(io.rendered("A 7150.00"), vec![COLORS_SELECTED]);
}

#[test]
fn knob_moves_selection_while_selecting() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    io.events.clear();

    menu.process_tick(&mut io, &knob(4));
    assert!(io.events.is_empty());

    menu.process_tick(&mut io, &knob(6));
    assert_eq!(io.feedback(), vec![Cue::Symbol('B')]);
    assert_eq!(io.rendered("B 7150.00"), vec![COLORS_SELECTED]);
    // Knob never tunes while selecting.
    assert_eq!(io.frequency_writes(), 0);
}

#[test]
fn short_press_while_selecting_activates_highlighted_item() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    menu.process_tick(&mut io, &knob(25));
    assert_eq!(io.feedback(), vec![Cue::Symbol('A'), Cue::Symbol('U')]);

    io.events.clear();
    menu.process_tick(&mut io, &tuner(ButtonPress::Short));

    assert!(!menu.is_selecting());
    assert_eq!(io.count(&Event::Activate(2)), 1);
    assert_eq!(io.active_mode(), VfoMode::Usb);
    assert_eq!(io.count(&Event::Persist), 1);

    // The end-state render precedes the activation.
    let first_render = io
        .events
        .iter()
        .position(|e| matches!(e, Event::Render { label, .. } if label == "USB"));
    let activation = io.events.iter().position(|e| *e == Event::Activate(2));
    assert!(first_render < activation);
}

#[test]
fn long_press_toggles_morse_menu_feedback() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let status = menu.process_tick(&mut io, &tuner(ButtonPress::Long));
    assert_eq!(status, MenuStatus::StillActive);
    assert!(io.settings.morse_menu_on);
    assert_eq!(io.feedback(), vec![Cue::Enabled]);
    assert_eq!(io.count(&Event::Persist), 1);
    assert_eq!(io.frequency_writes(), 0);

    io.events.clear();
    menu.process_tick(&mut io, &tuner(ButtonPress::Long));
    assert!(!io.settings.morse_menu_on);
    assert_eq!(io.feedback(), vec![Cue::Disabled]);
    assert_eq!(io.count(&Event::Persist), 1);
}

#[test]
fn long_press_survives_persist_failure() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();
    io.persist_fails = true;

    assert_eq!(menu.process_tick(&mut io, &tuner(ButtonPress::Long)), MenuStatus::StillActive);
    assert!(io.settings.morse_menu_on);
    assert_eq!(io.count(&Event::Persist), 1);
}

#[test]
fn tuner_button_beats_knob_in_same_tick() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let input = TickInput {
        tuner_button: ButtonPress::Short,
        knob: 5,
        ..TickInput::default()
    };
    menu.process_tick(&mut io, &input);

    assert!(menu.is_selecting());
    assert_eq!(menu.selector().raw_position(), 0);
    assert_eq!(io.frequency_writes(), 0);
}

#[test]
fn long_press_beats_touch_and_knob() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let input = TickInput {
        tuner_button: ButtonPress::Long,
        touch_button: ButtonPress::Short,
        touch_point: Point::new(5, 30),
        knob: -3,
    };
    menu.process_tick(&mut io, &input);

    assert_eq!(io.count(&Event::Activate(2)), 0);
    assert_eq!(io.frequency_writes(), 0);
    assert!(io.settings.morse_menu_on);
}

#[test]
fn touch_beats_knob_in_same_tick() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let input = TickInput {
        knob: 9,
        ..touch(5, 30)
    };
    menu.process_tick(&mut io, &input);

    assert_eq!(io.count(&Event::Activate(2)), 1);
    assert_eq!(io.active_mode(), VfoMode::Usb);
    assert_eq!(io.active_frequency(), 7_150_000);
    assert_eq!(io.count(&Event::SetFrequency(7_150_450)), 0);
}

#[test]
fn long_touch_behaves_like_short_touch() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let input = TickInput {
        touch_button: ButtonPress::Long,
        ..touch(100, 10)
    };
    menu.process_tick(&mut io, &input);

    assert_eq!(io.count(&Event::Activate(1)), 1);
    assert_eq!(io.settings.active_vfo, Vfo::B);
}

#[test]
fn touch_miss_is_swallowed() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    let input = TickInput {
        knob: 4,
        ..touch(63, 5)
    };
    assert_eq!(menu.process_tick(&mut io, &input), MenuStatus::StillActive);
    assert!(io.events.is_empty());
}

#[test]
fn knob_tunes_and_redraws_readout_when_not_selecting() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    menu.process_tick(&mut io, &knob(3));

    assert_eq!(io.active_frequency(), 7_150_150);
    assert_eq!(io.rendered("A 7150.15").len(), 1);
    assert_eq!(io.renders(), 1);
    assert_eq!(io.count(&Event::Persist), 0);

    io.events.clear();
    menu.process_tick(&mut io, &idle());
    assert!(io.events.is_empty());
}

#[test]
fn knob_redraws_readout_of_active_vfo_b() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();
    io.settings.active_vfo = Vfo::B;
    io.settings.vfo_b.frequency_hz = 7_000_000;

    menu.process_tick(&mut io, &knob(0));
    io.events.clear();
    menu.process_tick(&mut io, &knob(3));

    assert_eq!(io.active_frequency(), 7_000_150);
    assert_eq!(io.settings.vfo_a.frequency_hz, 7_150_000);
    assert_eq!(io.rendered("B 7000.15").len(), 1);
    assert!(io.rendered("A 7150.00").is_empty());
    assert_eq!(io.renders(), 1);
}

#[test]
fn touch_activation_ends_selection() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    assert!(menu.is_selecting());
    io.events.clear();

    // USB button.
    menu.process_tick(&mut io, &touch(5, 30));

    assert_eq!(io.active_mode(), VfoMode::Usb);
    assert!(!menu.is_selecting());
    assert_eq!(menu.selector().raw_position(), 0);
    assert!(io.rendered("USB").iter().all(|c| *c != COLORS_SELECTED));
    assert!(io.rendered("A 7150.00").iter().all(|c| *c != COLORS_SELECTED));

    // The knob tunes again instead of moving a hidden highlight.
    io.events.clear();
    menu.process_tick(&mut io, &knob(2));
    assert_eq!(io.active_frequency(), 7_150_100);
    assert!(io.feedback().is_empty());

    // And the next short press starts a fresh selection on item 0.
    io.events.clear();
    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    assert!(menu.is_selecting());
    assert_eq!(io.count(&Event::Activate(2)), 0);
    assert_eq!(io.feedback(), vec![Cue::Symbol('A')]);
}

#[test]
fn tuning_across_split_persists_and_redraws_mode_buttons() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::tuned_to(9_999_950);

    menu.process_tick(&mut io, &knob(1));

    assert_eq!(io.active_mode(), VfoMode::Usb);
    assert_eq!(io.count(&Event::Persist), 1);
    assert_eq!(io.rendered("USB").len(), 1);
    assert_eq!(io.rendered("LSB").len(), 1);
}

#[test]
fn activation_of_missing_item_is_ignored() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&[], &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    menu.process_tick(&mut io, &knob(30));
    let status = menu.process_tick(&mut io, &tuner(ButtonPress::Short));

    assert_eq!(status, MenuStatus::StillActive);
    assert!(io.events.is_empty());
}

#[test]
fn opening_unknown_submenu_is_ignored() {
    let mut subs: [&mut dyn Menu<MockPanel>; 0] = [];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();
    io.forced_activation = Some(Activation::OpenSubmenu(5));

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    assert_eq!(menu.active_submenu(), None);

    // Knob still tunes.
    menu.process_tick(&mut io, &knob(1));
    assert_eq!(io.active_frequency(), 7_150_050);
}

// ═══════════════════════════════════════════════════════════════════════════
// Submenu Delegation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn active_submenu_gets_first_refusal() {
    static SCRIPT: [MenuStatus; 2] = [MenuStatus::StillActive, MenuStatus::ExitedRedraw];
    let mut scripted = ScriptedMenu::new(&SCRIPT);
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut scripted];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    assert_eq!(menu.active_submenu(), Some(0));
    assert_eq!(io.count(&Event::SubmenuInit), 1);

    // Submenu keeps the tick: parent neither acts nor redraws.
    io.events.clear();
    let input = TickInput {
        tuner_button: ButtonPress::Short,
        knob: 7,
        ..TickInput::default()
    };
    assert_eq!(menu.process_tick(&mut io, &input), MenuStatus::StillActive);
    assert_eq!(io.events, vec![Event::SubmenuTick]);
    assert!(!menu.is_selecting());

    // Submenu exits with redraw: parent repaints, still no input handling.
    io.events.clear();
    menu.process_tick(&mut io, &knob(7));
    assert_eq!(io.count(&Event::SubmenuTick), 1);
    assert_eq!(io.rendered("A 7150.00").len(), 1);
    assert_eq!(io.frequency_writes(), 0);
    assert_eq!(menu.active_submenu(), None);

    // Back in charge.
    io.events.clear();
    menu.process_tick(&mut io, &knob(1));
    assert_eq!(io.count(&Event::SubmenuTick), 0);
    assert_eq!(io.active_frequency(), 7_150_050);
}

#[test]
fn submenu_exit_without_redraw_skips_parent_render() {
    static SCRIPT: [MenuStatus; 1] = [MenuStatus::ExitedNoRedraw];
    let mut scripted = ScriptedMenu::new(&SCRIPT);
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut scripted];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    io.events.clear();

    menu.process_tick(&mut io, &knob(2));
    assert_eq!(io.events, vec![Event::SubmenuTick]);
    assert_eq!(menu.active_submenu(), None);
}

#[test]
fn touch_opening_submenu_ends_parent_selection() {
    let mut scripted = ScriptedMenu::new(&[]);
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut scripted];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    menu.process_tick(&mut io, &knob(42));
    assert!(menu.is_selecting());

    // Touching BAND opens the submenu mid-selection.
    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    assert_eq!(menu.active_submenu(), Some(0));
    assert!(!menu.is_selecting());
    assert_eq!(menu.selector().raw_position(), 0);

    // The press goes to the submenu, not to a new parent selection.
    menu.process_tick(&mut io, &tuner(ButtonPress::Short));
    assert!(!menu.is_selecting());
    assert_eq!(menu.selector().raw_position(), 0);
    assert_eq!(io.count(&Event::SubmenuTick), 1);
}

#[test]
fn delegation_recurses_through_nested_menus() {
    let mut leaf = ScriptedMenu::new(&[]);
    let mut inner_subs: [&mut dyn Menu<MockPanel>; 1] = [&mut leaf];
    let mut inner = MainMenu::new(&MAIN_MENU_BUTTONS, &mut inner_subs);
    let mut io = MockPanel::new();

    // Open the leaf from the inner menu before nesting it.
    inner.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    assert_eq!(inner.active_submenu(), Some(0));

    let mut outer_subs: [&mut dyn Menu<MockPanel>; 1] = [&mut inner];
    let mut outer = MainMenu::new(&MAIN_MENU_BUTTONS, &mut outer_subs);
    outer.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    assert_eq!(outer.active_submenu(), Some(0));

    io.events.clear();
    outer.process_tick(&mut io, &knob(3));
    assert_eq!(io.events, vec![Event::SubmenuTick]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Band Submenu
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn band_menu_opens_selecting_first_band() {
    let mut bands = BandMenu::new();
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut bands];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));

    assert_eq!(menu.active_submenu(), Some(0));
    assert_eq!(io.rendered("80m").last(), Some(&COLORS_SELECTED));
    assert_eq!(io.rendered("15m").len(), 1);
    assert_eq!(io.feedback(), vec![Cue::Symbol('8')]);
}

#[test]
fn band_menu_knob_and_press_jump_to_band() {
    let mut bands = BandMenu::new();
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut bands];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::with_morse();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    io.events.clear();

    menu.process_tick(&mut io, &knob(35));
    assert_eq!(io.feedback(), vec![Cue::Symbol('2')]);
    assert_eq!(io.frequency_writes(), 0);

    io.events.clear();
    menu.process_tick(&mut io, &tuner(ButtonPress::Short));

    assert_eq!(io.count(&Event::Activate(3)), 1);
    assert_eq!(io.active_frequency(), 14_000_000);
    assert_eq!(io.active_mode(), VfoMode::Usb);
    assert_eq!(io.count(&Event::Persist), 1);
    assert_eq!(menu.active_submenu(), None);
    // Main menu repainted with the new readout.
    assert_eq!(io.rendered("A 14000.00").len(), 1);
}

#[test]
fn band_menu_touch_selects_band_directly() {
    let mut bands = BandMenu::new();
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut bands];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::tuned_to(14_074_000);

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    // 40m sits top-middle.
    menu.process_tick(&mut io, &touch(60, 10));

    assert_eq!(io.active_frequency(), 7_000_000);
    assert_eq!(io.active_mode(), VfoMode::Lsb);
    assert_eq!(menu.active_submenu(), None);
}

#[test]
fn band_menu_long_press_cancels() {
    let mut bands = BandMenu::new();
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut bands];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    menu.process_tick(&mut io, &knob(20));
    menu.process_tick(&mut io, &tuner(ButtonPress::Long));

    assert_eq!(menu.active_submenu(), None);
    assert_eq!(io.active_frequency(), 7_150_000);
    assert!(!io.settings.morse_menu_on);
    assert_eq!(io.count(&Event::Activate(2)), 0);
}

#[test]
fn band_menu_ignores_touch_miss() {
    let mut bands = BandMenu::new();
    let mut subs: [&mut dyn Menu<MockPanel>; 1] = [&mut bands];
    let mut menu = MainMenu::new(&MAIN_MENU_BUTTONS, &mut subs);
    let mut io = MockPanel::new();

    menu.process_tick(&mut io, &touch(BAND_BUTTON.0, BAND_BUTTON.1));
    io.events.clear();

    // Gap between the two band rows.
    menu.process_tick(&mut io, &touch(20, 32));
    assert!(io.events.is_empty());
    assert_eq!(menu.active_submenu(), Some(0));
}

//! Knob-driven item selection.
//!
//! The knob moves a fine-grained raw counter; the selected item is
//! `raw_position / counts_per_item`. Highlight and morse feedback only
//! follow item changes, never individual counts.

use crate::panel::{announce, Cue, Feedback, SettingsStore};
use crate::registry::Button;

/// An item-boundary crossing produced by one adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Crossing {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct Selector {
    raw_position: i32,
    selecting: bool,
    counts_per_item: i32,
}

impl Selector {
    pub const fn new(counts_per_item: i32) -> Self {
        Self {
            raw_position: 0,
            selecting: false,
            counts_per_item: if counts_per_item > 0 { counts_per_item } else { 1 },
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn raw_position(&self) -> i32 {
        self.raw_position
    }

    pub fn selected_item(&self) -> usize {
        (self.raw_position / self.counts_per_item) as usize
    }

    /// Leave selection mode without activating anything.
    pub fn cancel(&mut self) {
        self.selecting = false;
        self.raw_position = 0;
    }

    /// Move the raw counter by `delta`, clamped to `[0, item_count * K - 1]`.
    ///
    /// Pure state update; returns the crossing if the item index changed.
    pub fn step(&mut self, delta: i16, item_count: usize) -> Option<Crossing> {
        if delta == 0 || item_count == 0 {
            return None;
        }
        let max = (item_count as i32)
            .saturating_mul(self.counts_per_item)
            .saturating_sub(1);

        let from = self.selected_item();
        self.raw_position = self
            .raw_position
            .saturating_add(i32::from(delta))
            .clamp(0, max);
        let to = self.selected_item();

        (from != to).then_some(Crossing { from, to })
    }

    /// Enter selection mode on item 0.
    ///
    /// `draw(io, index, highlighted)` paints one button.
    pub fn begin_selecting<IO>(
        &mut self,
        io: &mut IO,
        buttons: &[Button],
        mut draw: impl FnMut(&mut IO, usize, bool),
    ) where
        IO: Feedback + SettingsStore,
    {
        self.raw_position = 0;
        self.selecting = true;

        let Some(first) = buttons.first() else {
            return;
        };
        draw(io, 0, true);
        announce(io, Cue::Symbol(first.symbol));
    }

    pub fn adjust<IO>(
        &mut self,
        io: &mut IO,
        buttons: &[Button],
        delta: i16,
        mut draw: impl FnMut(&mut IO, usize, bool),
    ) where
        IO: Feedback + SettingsStore,
    {
        let Some(Crossing { from, to }) = self.step(delta, buttons.len()) else {
            return;
        };
        debug!("Selection {} -> {}", from, to);
        draw(io, from, false);
        draw(io, to, true);
        announce(io, Cue::Symbol(buttons[to].symbol));
    }

    /// Leave selection mode, repaint the chosen item unhighlighted and
    /// return its index. The caller activates it afterwards.
    pub fn end_selecting<IO>(
        &mut self,
        io: &mut IO,
        buttons: &[Button],
        mut draw: impl FnMut(&mut IO, usize, bool),
    ) -> usize {
        self.selecting = false;
        let item = self.selected_item();
        if item < buttons.len() {
            draw(io, item, false);
        }
        item
    }
}

//! Morse patterns for accessibility cues.
//!
//! Patterns are `.`/`-` strings. Timing follows the usual unit scheme:
//! dit = 1 unit, dah = 3 units, gap between elements = 1 unit.

use crate::panel::Cue;

const LETTERS: [&str; 26] = [
    ".-", "-...", "-.-.", "-..", ".", "..-.", "--.", "....", "..", ".---", "-.-", ".-..", "--",
    "-.", "---", ".--.", "--.-", ".-.", "...", "-", "..-", "...-", ".--", "-..-", "-.--", "--..",
];

const DIGITS: [&str; 10] = [
    "-----", ".----", "..---", "...--", "....-", ".....", "-....", "--...", "---..", "----.",
];

/// Played when menu feedback is switched on.
const ENABLED_PATTERN: &str = ".-.-";
/// Played when menu feedback is switched off.
const DISABLED_PATTERN: &str = "-.-.-";

/// Pattern for a letter (either case) or digit.
pub fn pattern(c: char) -> Option<&'static str> {
    match c {
        'A'..='Z' => Some(LETTERS[(c as u8 - b'A') as usize]),
        'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize]),
        _ => None,
    }
}

pub fn cue_pattern(cue: Cue) -> Option<&'static str> {
    match cue {
        Cue::Symbol(c) => pattern(c),
        Cue::Enabled => Some(ENABLED_PATTERN),
        Cue::Disabled => Some(DISABLED_PATTERN),
    }
}

/// Expand a pattern into `(tone_on, units)` steps, gaps included.
pub fn timeline(pattern: &'static str) -> impl Iterator<Item = (bool, u8)> {
    pattern.bytes().enumerate().flat_map(|(i, element)| {
        let gap = (i > 0).then_some((false, 1));
        let units = if element == b'-' { 3 } else { 1 };
        gap.into_iter().chain(core::iter::once((true, units)))
    })
}

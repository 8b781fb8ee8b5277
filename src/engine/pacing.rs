use std::time::Duration;

use super::tokenizer::Sequence;
use crate::utils::strings;

pub const MIN_WPM: u16 = 100;
pub const MAX_WPM: u16 = 1000;

pub fn clamp_rate(wpm: i64) -> u16 {
    wpm.clamp(MIN_WPM as i64, MAX_WPM as i64) as u16
}

/// Milliseconds per word at `wpm`, before punctuation.
pub fn base_delay_ms(wpm: u16) -> f64 {
    60.0 / f64::from(wpm.max(1)) * 1000.0
}

/// Hold multiplier in tenths. Sentence ends hold longest, then clause
/// breaks, then commas.
pub fn multiplier_tenths(unit: &str) -> u64 {
    if strings::ends_with_terminator(unit) {
        15
    } else if strings::ends_with_clause_break(unit) {
        12
    } else if strings::ends_with_comma(unit) {
        11
    } else {
        10
    }
}

pub fn multiplier(unit: &str) -> f64 {
    multiplier_tenths(unit) as f64 / 10.0
}

pub fn delay_ms(unit: &str, wpm: u16) -> f64 {
    base_delay_ms(wpm) * multiplier(unit)
}

/// Timer length for `unit`, rounded to the nearest nanosecond.
pub fn delay(unit: &str, wpm: u16) -> Duration {
    Duration::from_nanos((delay_ms(unit, wpm) * 1_000_000.0).round() as u64)
}

/// Sum of delays of every unit strictly after `from_exclusive`.
pub fn remaining_ms(sequence: &Sequence, from_exclusive: usize, wpm: u16) -> f64 {
    sequence
        .iter()
        .skip(from_exclusive.saturating_add(1))
        .map(|unit| delay_ms(unit, wpm))
        .sum()
}

/// Whole seconds left, rounded up. Summed in integers: each unit costs
/// `60_000 * tenths / (10 * wpm)` ms, so the total over the shared denominator
/// is ceil-divided exactly.
pub fn remaining_seconds(sequence: &Sequence, from_exclusive: usize, wpm: u16) -> u64 {
    let tenths: u64 = sequence
        .iter()
        .skip(from_exclusive.saturating_add(1))
        .map(multiplier_tenths)
        .sum();
    let denominator = 1000 * 10 * u64::from(wpm.max(1));
    (60_000 * tenths).div_ceil(denominator)
}

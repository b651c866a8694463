//! Rounding, clamping and aggregation shared by both blend models.

use crate::engine::constants::{STAT_MAX, STAT_MIN};
use crate::models::{Berry, BerryFlags, Flavor, FlavorLevels};

/// Clamp an intermediate value into the stat range [0, 99].
#[inline]
pub fn clamp_stat(value: i64) -> u8 {
    value.clamp(STAT_MIN, STAT_MAX) as u8
}

/// Round to the nearest integer, halves away from zero.
#[inline]
pub fn round_stat(value: f64) -> i64 {
    value.round() as i64
}

/// Integer division rounding halves up. `numerator` must be non-negative
/// and `denominator` positive. Saturates instead of overflowing.
#[inline]
pub fn div_round_half_up(numerator: i64, denominator: i64) -> i64 {
    numerator.saturating_add(denominator / 2) / denominator
}

/// Per-flavor sum of signed levels, saturating at the i32 bounds.
/// Order-independent.
pub fn sum_levels(berries: &[&Berry]) -> FlavorLevels {
    FlavorLevels::from_fn(|flavor| {
        berries
            .iter()
            .fold(0i32, |acc, b| acc.saturating_add(b.flavors.get(flavor)))
    })
}

/// Number of flavors whose total is below zero.
pub fn count_negatives(levels: &FlavorLevels) -> u32 {
    Flavor::ALL
        .iter()
        .filter(|&&flavor| levels.get(flavor) < 0)
        .count() as u32
}

/// Logical OR of every berry's flags.
pub fn aggregate_flags(berries: &[&Berry]) -> BerryFlags {
    berries
        .iter()
        .fold(BerryFlags::default(), |acc, b| acc.union(b.flags))
}

/// `floor(total smoothness / n) - n`. Callers guarantee `n > 0`.
pub fn feel(berries: &[&Berry]) -> i32 {
    let n = berries.len() as i64;
    let total: i64 = berries.iter().map(|b| b.smoothness as i64).sum();
    (total / n - n) as i32
}

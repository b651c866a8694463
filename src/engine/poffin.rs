use tracing::debug;

use crate::engine::constants::{DEFAULT_MISTAKES, POFFIN_BASELINE_SECONDS};
use crate::engine::normalize::{
    aggregate_flags, clamp_stat, count_negatives, feel, round_stat, sum_levels,
};
use crate::error::{BlendError, Result};
use crate::models::{Berry, BlendResult, FlavorStats};

/// Cooking parameters for a Poffin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoffinParams {
    /// Seconds spent stirring.
    pub time: f64,
    /// Times the stirring slipped or the pot overflowed.
    pub mistakes: u32,
}

impl Default for PoffinParams {
    fn default() -> Self {
        Self {
            time: POFFIN_BASELINE_SECONDS,
            mistakes: DEFAULT_MISTAKES,
        }
    }
}

/// Cook a Poffin from `berries`.
///
/// Each flavor is the plain sum of the berries' levels, lowered by one point
/// per spoiled (negative) flavor and one point per mistake, then scaled by
/// `60 / time` and clamped to [0, 99].
pub fn blend(berries: &[&Berry], params: &PoffinParams) -> Result<BlendResult> {
    if berries.is_empty() {
        return Err(BlendError::InvalidInput("no berries to cook".to_string()));
    }
    if !params.time.is_finite() || params.time <= 0.0 {
        return Err(BlendError::InvalidInput(format!(
            "cooking time must be positive, got {}",
            params.time
        )));
    }

    let raw = sum_levels(berries);
    let num_negatives = count_negatives(&raw);
    let penalty = num_negatives as i64 + params.mistakes as i64;
    let scale = POFFIN_BASELINE_SECONDS / params.time;

    let stats = FlavorStats::from_fn(|flavor| {
        let adjusted = raw.get(flavor) as i64 - penalty;
        clamp_stat(round_stat(adjusted as f64 * scale))
    });

    debug!(
        "poffin: raw={:?} negatives={} mistakes={} time={} -> {:?}",
        raw.to_array(),
        num_negatives,
        params.mistakes,
        params.time,
        stats.to_array()
    );

    Ok(BlendResult {
        stats,
        feel: feel(berries),
        efficiency: None,
        rpm: None,
        time: Some(params.time),
        flags: aggregate_flags(berries),
    })
}

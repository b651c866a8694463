use rand::Rng;

use crate::engine::PokeblockConfig;

/// Number of tunable knobs in a `PokeblockConfig`.
pub const NUM_KNOBS: usize = 2;

/// Min/max (inclusive) for each knob.
#[derive(Debug, Clone)]
pub struct KnobRanges {
    /// (min, max) for centi-RPM per bonus point
    pub centi_rpm_per_point: (i64, i64),
    /// (min, max) for the crossing penalty
    pub crossing_penalty: (i32, i32),
}

impl Default for KnobRanges {
    fn default() -> Self {
        Self {
            centi_rpm_per_point: (200, 500),
            crossing_penalty: (0, 5),
        }
    }
}

/// Draw a config uniformly within `ranges`.
pub fn random_config(rng: &mut impl Rng, ranges: &KnobRanges) -> PokeblockConfig {
    PokeblockConfig {
        centi_rpm_per_point: rng
            .gen_range(ranges.centi_rpm_per_point.0..=ranges.centi_rpm_per_point.1),
        crossing_penalty: rng.gen_range(ranges.crossing_penalty.0..=ranges.crossing_penalty.1),
    }
}

/// Copy of `config` with one knob moved by `step`, clamped to `ranges`.
///
/// `knob_idx`: 0 = centi_rpm_per_point, 1 = crossing_penalty. Any other
/// index returns the config unchanged.
pub fn perturb(
    config: &PokeblockConfig,
    knob_idx: usize,
    step: i64,
    ranges: &KnobRanges,
) -> PokeblockConfig {
    let mut new = *config;
    match knob_idx {
        0 => {
            new.centi_rpm_per_point = (config.centi_rpm_per_point + step)
                .clamp(ranges.centi_rpm_per_point.0, ranges.centi_rpm_per_point.1);
        }
        1 => {
            let moved = (config.crossing_penalty as i64 + step).clamp(
                ranges.crossing_penalty.0 as i64,
                ranges.crossing_penalty.1 as i64,
            );
            new.crossing_penalty = moved as i32;
        }
        _ => {}
    }
    new
}

/// Distance from the default machine constants; smaller is preferred when
/// two configs fit the fixture equally well.
pub fn distance_from_default(config: &PokeblockConfig) -> i64 {
    let default = PokeblockConfig::default();
    (config.centi_rpm_per_point - default.centi_rpm_per_point).abs()
        + (config.crossing_penalty as i64 - default.crossing_penalty as i64).abs()
}

/// Compact one-line description.
pub fn describe(config: &PokeblockConfig) -> String {
    format!(
        "cpp={} xpen={}",
        config.centi_rpm_per_point, config.crossing_penalty
    )
}

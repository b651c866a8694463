use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::constants::*;
use crate::engine::normalize::{
    aggregate_flags, clamp_stat, div_round_half_up, feel, sum_levels,
};
use crate::error::{BlendError, Result};
use crate::models::{Berry, BlendResult, Flavor, FlavorLevels, FlavorStats};

/// Tunable constants of the blender model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokeblockConfig {
    /// Centi-RPM per percentage point of yield bonus.
    pub centi_rpm_per_point: i64,
    /// Points subtracted from a flavor per sign change of its running total.
    pub crossing_penalty: i32,
}

impl Default for PokeblockConfig {
    fn default() -> Self {
        Self {
            centi_rpm_per_point: CENTI_RPM_PER_BONUS_POINT,
            crossing_penalty: CROSSING_PENALTY,
        }
    }
}

/// Canonical blender speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlenderPreset {
    Player,
    Npc,
    BlendMaster,
}

impl BlenderPreset {
    pub const ALL: [BlenderPreset; 3] = [
        BlenderPreset::Player,
        BlenderPreset::Npc,
        BlenderPreset::BlendMaster,
    ];

    pub fn rpm(self) -> f64 {
        match self {
            BlenderPreset::Player => PLAYER_RPM,
            BlenderPreset::Npc => NPC_RPM,
            BlenderPreset::BlendMaster => BLEND_MASTER_RPM,
        }
    }
}

/// Yield bonus in percentage points earned at `rpm`. The float-to-int cast
/// saturates, so absurd speeds give a huge but finite bonus.
pub fn rpm_bonus_percent(rpm: f64, config: &PokeblockConfig) -> i64 {
    let centi_rpm = (rpm * 100.0).round() as i64;
    centi_rpm / config.centi_rpm_per_point.max(1)
}

/// Number of times the running total of `flavor` flips sign as the berries
/// are dropped in order. Passing through zero is not a flip by itself.
fn count_crossings(berries: &[&Berry], flavor: Flavor) -> i32 {
    let mut running: i32 = 0;
    let mut prev_sign = 0;
    let mut crossings = 0;
    for berry in berries {
        running = running.saturating_add(berry.flavors.get(flavor));
        let sign = running.signum();
        if sign != 0 {
            if prev_sign != 0 && sign != prev_sign {
                crossings += 1;
            }
            prev_sign = sign;
        }
    }
    crossings
}

/// Apply the yield percentage to accumulated levels and clamp. Products
/// past i64 saturate, so a larger yield never lowers a stat.
fn scale_stats(accumulated: &FlavorLevels, yield_percent: i64) -> FlavorStats {
    FlavorStats::from_fn(|flavor| {
        let level = accumulated.get(flavor).max(0) as i64;
        clamp_stat(div_round_half_up(level.saturating_mul(yield_percent), 100))
    })
}

/// Blend a Pokeblock at `rpm` with the default machine constants.
pub fn blend(berries: &[&Berry], rpm: f64) -> Result<BlendResult> {
    blend_with(berries, rpm, &PokeblockConfig::default())
}

/// Blend a Pokeblock at `rpm` with explicit machine constants.
///
/// Flavors accumulate berry by berry in drop order. Every sign flip of a
/// flavor's running total costs `crossing_penalty`, the remainder is scaled
/// by the RPM yield and clamped to [0, 99]. `efficiency` compares the stat
/// total with the same berries blended at top speed without any crossing
/// penalty.
pub fn blend_with(berries: &[&Berry], rpm: f64, config: &PokeblockConfig) -> Result<BlendResult> {
    if berries.is_empty() {
        return Err(BlendError::InvalidInput("no berries to blend".to_string()));
    }
    if !rpm.is_finite() || rpm <= 0.0 {
        return Err(BlendError::InvalidInput(format!(
            "rpm must be positive, got {}",
            rpm
        )));
    }

    let raw = sum_levels(berries);
    let crossings = FlavorLevels::from_fn(|flavor| count_crossings(berries, flavor));
    let accumulated = FlavorLevels::from_fn(|flavor| {
        raw.get(flavor)
            .saturating_sub(crossings.get(flavor).saturating_mul(config.crossing_penalty))
    });

    let bonus = rpm_bonus_percent(rpm, config);
    let stats = scale_stats(&accumulated, BASE_YIELD_PERCENT.saturating_add(bonus));

    let ceiling_bonus = rpm_bonus_percent(rpm.max(MAX_RPM), config);
    let ceiling = scale_stats(&raw, BASE_YIELD_PERCENT.saturating_add(ceiling_bonus));
    let efficiency = match ceiling.total() {
        0 => 0.0,
        best => stats.total() as f64 * 100.0 / best as f64,
    };

    debug!(
        "pokeblock: raw={:?} crossings={:?} rpm={} bonus={}% -> {:?} eff={:.2}",
        raw.to_array(),
        crossings.to_array(),
        rpm,
        bonus,
        stats.to_array(),
        efficiency
    );

    Ok(BlendResult {
        stats,
        feel: feel(berries),
        efficiency: Some(efficiency),
        rpm: Some(rpm),
        time: None,
        flags: aggregate_flags(berries),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn berry(name: &str, levels: [i32; 5], smoothness: u32) -> Berry {
        Berry::new(
            name,
            FlavorLevels::from_fn(|f| levels[f as usize]),
            smoothness,
        )
    }

    #[test]
    fn test_preset_bonus_points() {
        let config = PokeblockConfig::default();
        assert_eq!(rpm_bonus_percent(PLAYER_RPM, &config), 27);
        assert_eq!(rpm_bonus_percent(NPC_RPM, &config), 29);
        assert_eq!(rpm_bonus_percent(BLEND_MASTER_RPM, &config), 45);
        assert_eq!(rpm_bonus_percent(3.32, &config), 0);
    }

    #[test]
    fn test_count_crossings() {
        let up = berry("up", [10, 0, 0, 0, 0], 20);
        let down = berry("down", [-15, 0, 0, 0, 0], 20);
        let zero = berry("zero", [-10, 0, 0, 0, 0], 20);

        // 10 -> -5 -> 5
        assert_eq!(count_crossings(&[&up, &down, &up], Flavor::Spicy), 2);
        // 10 -> 0 -> 10: touching zero keeps the previous sign
        assert_eq!(count_crossings(&[&up, &zero, &up], Flavor::Spicy), 0);
        // -15 -> -5 -> 5
        assert_eq!(count_crossings(&[&down, &up, &up], Flavor::Spicy), 1);
        assert_eq!(count_crossings(&[&up], Flavor::Dry), 0);
    }

    #[test]
    fn test_crossing_penalty_reduces_flavor() {
        let sweet = berry("sweet", [0, 0, 40, 0, 0], 30);
        let anti = berry("anti", [0, 0, -10, 0, 0], 30);

        // -10 -> 30 flips once; 40 -> 30 never flips.
        let flipped = blend(&[&anti, &sweet], BLEND_MASTER_RPM).unwrap();
        let steady = blend(&[&sweet, &anti], BLEND_MASTER_RPM).unwrap();

        // 29 * 1.45 = 42.05 and 30 * 1.45 = 43.5
        assert_eq!(flipped.stats.sweet, 42);
        assert_eq!(steady.stats.sweet, 44);
        assert_eq!(steady.efficiency, Some(100.0));
    }

    #[test]
    fn test_huge_rpm_saturates_to_max() {
        let spelon = berry("spelon", [40, 10, -10, 0, 0], 35);
        let berries = vec![&spelon; 9];

        let fast = blend(&berries, BLEND_MASTER_RPM).unwrap();
        let absurd = blend(&berries, 1e18).unwrap();
        assert_eq!(fast.stats.spicy, 99);
        assert_eq!(absurd.stats.to_array(), [99, 99, 0, 0, 0]);

        let tight = PokeblockConfig {
            centi_rpm_per_point: 1,
            crossing_penalty: 1,
        };
        let result = blend_with(&berries, f64::MAX, &tight).unwrap();
        assert_eq!(result.stats.to_array(), [99, 99, 0, 0, 0]);
        assert_eq!(result.efficiency, Some(100.0));
    }

    #[test]
    fn test_zero_ceiling_efficiency() {
        let anti = berry("anti", [-10, -10, -10, -10, -10], 30);
        let result = blend(&[&anti], PLAYER_RPM).unwrap();
        assert_eq!(result.stats.total(), 0);
        assert_eq!(result.efficiency, Some(0.0));
    }

    #[test]
    fn test_rejects_bad_input() {
        let b = berry("b", [10, 0, 0, 0, 0], 20);
        assert!(matches!(blend(&[], 100.0), Err(BlendError::InvalidInput(_))));
        for rpm in [0.0, -89.91, f64::NAN] {
            assert!(matches!(blend(&[&b], rpm), Err(BlendError::InvalidInput(_))));
        }
    }
}

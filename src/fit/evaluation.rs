use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::BerryCatalog;
use crate::engine::pokeblock::blend_with;
use crate::engine::{PokeblockConfig, STAT_MAX};
use crate::fit::golden::GoldenRow;
use crate::fit::knobs::{distance_from_default, perturb, KnobRanges, NUM_KNOBS};
use crate::models::Flavor;

/// Error charged for a row that cannot be blended at all.
const UNRESOLVED_ROW_ERROR: u64 = Flavor::ALL.len() as u64 * STAT_MAX as u64;

/// How well one config reproduces the golden fixture.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub config: PokeblockConfig,
    /// Rows whose five stats all match.
    pub exact_matches: usize,
    /// Sum of absolute stat differences over every row.
    pub total_error: u64,
    /// Rows that failed to blend (unknown berry or invalid RPM).
    pub unresolved: usize,
    pub rows: usize,
}

impl FitResult {
    /// Fraction of rows reproduced exactly.
    pub fn match_rate(&self) -> f64 {
        if self.rows > 0 {
            self.exact_matches as f64 / self.rows as f64
        } else {
            0.0
        }
    }

    /// Lexicographic comparison, `Greater` meaning `self` fits better:
    /// more exact matches, then lower total error, then closer to the
    /// default constants.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.exact_matches
            .cmp(&other.exact_matches)
            .then_with(|| other.total_error.cmp(&self.total_error))
            .then_with(|| {
                distance_from_default(&other.config).cmp(&distance_from_default(&self.config))
            })
    }
}

/// Score `config` against every golden row. Rows that fail to blend are
/// charged the maximum error rather than skipped.
pub fn evaluate_config(
    config: &PokeblockConfig,
    catalog: &BerryCatalog,
    rows: &[GoldenRow],
) -> FitResult {
    let mut result = FitResult {
        config: *config,
        exact_matches: 0,
        total_error: 0,
        unresolved: 0,
        rows: rows.len(),
    };

    for row in rows {
        let blended = catalog
            .resolve(&row.names())
            .and_then(|berries| blend_with(&berries, row.rpm, config));

        let actual = match blended {
            Ok(r) => r.stats,
            Err(e) => {
                debug!("golden row '{}' unresolved: {}", row.berries, e);
                result.unresolved += 1;
                result.total_error += UNRESOLVED_ROW_ERROR;
                continue;
            }
        };

        let expected = row.expected();
        let error: u64 = Flavor::ALL
            .iter()
            .map(|&f| actual.get(f).abs_diff(expected.get(f)) as u64)
            .sum();

        if error == 0 {
            result.exact_matches += 1;
        }
        result.total_error += error;
    }

    result
}

/// Hill-climbing refinement settings.
#[derive(Debug, Clone)]
pub struct HillClimbConfig {
    /// Maximum improvement rounds.
    pub max_rounds: usize,
    /// Step sizes tried in both directions for each knob.
    pub steps: Vec<i64>,
}

impl Default for HillClimbConfig {
    fn default() -> Self {
        Self {
            max_rounds: 50,
            steps: vec![1, 5, 25],
        }
    }
}

/// Refine `start` by moving one knob at a time while the fit improves.
pub fn hill_climb(
    start: &FitResult,
    catalog: &BerryCatalog,
    rows: &[GoldenRow],
    ranges: &KnobRanges,
    config: &HillClimbConfig,
) -> FitResult {
    let mut best = start.clone();

    for _ in 0..config.max_rounds {
        let mut improved = false;

        for knob_idx in 0..NUM_KNOBS {
            for &step in &config.steps {
                for delta in [-step, step] {
                    let candidate = perturb(&best.config, knob_idx, delta, ranges);
                    if candidate == best.config {
                        continue;
                    }
                    let result = evaluate_config(&candidate, catalog, rows);
                    if result.cmp_score(&best) == Ordering::Greater {
                        best = result;
                        improved = true;
                    }
                }
            }
        }

        if !improved {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Berry, FlavorLevels};

    fn sample_catalog() -> BerryCatalog {
        BerryCatalog::new(vec![
            Berry::new(
                "spelon",
                FlavorLevels {
                    spicy: 40,
                    dry: 10,
                    sweet: -10,
                    ..Default::default()
                },
                35,
            ),
            Berry::new(
                "watmel",
                FlavorLevels {
                    sweet: 40,
                    bitter: 10,
                    sour: -10,
                    ..Default::default()
                },
                35,
            ),
        ])
    }

    fn golden(berries: &str, rpm: f64, stats: [u8; 5]) -> GoldenRow {
        GoldenRow {
            berries: berries.to_string(),
            rpm,
            spicy: stats[0],
            dry: stats[1],
            sweet: stats[2],
            bitter: stats[3],
            sour: stats[4],
        }
    }

    #[test]
    fn test_default_config_matches_own_output() {
        let catalog = sample_catalog();
        let rows = vec![
            golden("spelon watmel", 150.0, [58, 15, 42, 15, 0]),
            golden("watmel spelon", 150.0, [58, 15, 44, 15, 0]),
        ];
        let result = evaluate_config(&PokeblockConfig::default(), &catalog, &rows);
        assert_eq!(result.exact_matches, 2);
        assert_eq!(result.total_error, 0);
        assert_eq!(result.match_rate(), 1.0);
    }

    #[test]
    fn test_unresolved_rows_are_charged() {
        let catalog = sample_catalog();
        let rows = vec![golden("spelon missing", 150.0, [0; 5])];
        let result = evaluate_config(&PokeblockConfig::default(), &catalog, &rows);
        assert_eq!(result.unresolved, 1);
        assert_eq!(result.exact_matches, 0);
        assert_eq!(result.total_error, UNRESOLVED_ROW_ERROR);
    }

    #[test]
    fn test_cmp_score_order() {
        let base = FitResult {
            config: PokeblockConfig::default(),
            exact_matches: 3,
            total_error: 10,
            unresolved: 0,
            rows: 5,
        };
        let more_matches = FitResult {
            exact_matches: 4,
            total_error: 50,
            ..base.clone()
        };
        let less_error = FitResult {
            total_error: 5,
            ..base.clone()
        };
        let far = FitResult {
            config: PokeblockConfig {
                centi_rpm_per_point: 300,
                crossing_penalty: 1,
            },
            ..base.clone()
        };

        assert_eq!(more_matches.cmp_score(&base), Ordering::Greater);
        assert_eq!(less_error.cmp_score(&base), Ordering::Greater);
        assert_eq!(far.cmp_score(&base), Ordering::Less);
    }

    #[test]
    fn test_hill_climb_never_worsens() {
        let catalog = sample_catalog();
        let rows = vec![golden("spelon watmel", 150.0, [58, 15, 42, 15, 0])];
        let ranges = KnobRanges::default();
        let start = evaluate_config(
            &PokeblockConfig {
                centi_rpm_per_point: 400,
                crossing_penalty: 3,
            },
            &catalog,
            &rows,
        );
        let refined = hill_climb(&start, &catalog, &rows, &ranges, &HillClimbConfig::default());
        assert_ne!(refined.cmp_score(&start), Ordering::Less);
        assert_eq!(refined.exact_matches, 1);
    }
}

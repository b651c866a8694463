/// Lowest value a flavor stat can hold.
pub const STAT_MIN: i64 = 0;

/// Highest value a flavor stat can hold.
pub const STAT_MAX: i64 = 99;

// ─────────────────────────────────────────────────────────────────────────────
// Poffin cooking
// ─────────────────────────────────────────────────────────────────────────────

/// Stirring time (seconds) at which a Poffin keeps its full yield.
pub const POFFIN_BASELINE_SECONDS: f64 = 60.0;

/// Default stirring mistakes.
pub const DEFAULT_MISTAKES: u32 = 0;

// ─────────────────────────────────────────────────────────────────────────────
// Pokeblock blending
// ─────────────────────────────────────────────────────────────────────────────

/// Typical RPM reached by a human player.
pub const PLAYER_RPM: f64 = 89.91;

/// Typical RPM reached when blending with NPCs.
pub const NPC_RPM: f64 = 96.57;

/// RPM reached with the Blend Master.
pub const BLEND_MASTER_RPM: f64 = 150.0;

/// Top speed of the blender; the efficiency ceiling is computed here.
pub const MAX_RPM: f64 = BLEND_MASTER_RPM;

/// Hundredths of an RPM needed for each extra percent of yield.
///
/// The machine tracks speed in centi-RPM, so 89.91 RPM is 8991 and earns
/// 8991 / 333 = 27 bonus points.
pub const CENTI_RPM_PER_BONUS_POINT: i64 = 333;

/// Points lost each time a flavor's running total changes sign while
/// berries are dropped in.
pub const CROSSING_PENALTY: i32 = 1;

/// Base yield percentage before the RPM bonus.
pub const BASE_YIELD_PERCENT: i64 = 100;

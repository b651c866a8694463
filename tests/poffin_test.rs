use berry_blend::engine::poffin::{blend, PoffinParams};
use berry_blend::error::BlendError;
use berry_blend::models::{Berry, BerryFlags, FlavorLevels};

fn make_berry(name: &str, levels: [i32; 5], smoothness: u32) -> Berry {
    Berry::new(
        name,
        FlavorLevels {
            spicy: levels[0],
            dry: levels[1],
            sweet: levels[2],
            bitter: levels[3],
            sour: levels[4],
        },
        smoothness,
    )
}

fn spicy_sour() -> Berry {
    make_berry("spicy-sour", [10, 0, 0, 0, -10], 20)
}

#[test]
fn test_worked_example_baseline_time() {
    let a = spicy_sour();
    let b = spicy_sour();
    let params = PoffinParams {
        time: 60.0,
        mistakes: 0,
    };

    let result = blend(&[&a, &b], &params).unwrap();

    // raw spicy 20, raw sour -20, one negative axis
    assert_eq!(result.stats.spicy, 19);
    assert_eq!(result.stats.sour, 0);
    assert_eq!(result.stats.dry, 0);
    assert_eq!(result.stats.sweet, 0);
    assert_eq!(result.stats.bitter, 0);
    // floor(40 / 2) - 2
    assert_eq!(result.feel, 18);
    assert_eq!(result.time, Some(60.0));
}

#[test]
fn test_worked_example_double_time() {
    let a = spicy_sour();
    let b = spicy_sour();
    let params = PoffinParams {
        time: 120.0,
        mistakes: 0,
    };

    let result = blend(&[&a, &b], &params).unwrap();

    // 19 * 60 / 120 = 9.5 rounds to 10
    assert_eq!(result.stats.spicy, 10);
    assert_eq!(result.feel, 18);
}

#[test]
fn test_yield_never_grows_with_time() {
    let berry = make_berry("rich", [40, 25, 0, 10, 0], 30);
    let mut previous = u8::MAX;
    for time in [30.0, 45.0, 60.0, 90.0, 120.0, 240.0] {
        let params = PoffinParams { time, mistakes: 1 };
        let spicy = blend(&[&berry, &berry], &params).unwrap().stats.spicy;
        assert!(spicy <= previous, "spicy grew at time {}", time);
        previous = spicy;
    }
}

#[test]
fn test_short_stir_clamps_to_max() {
    let berry = make_berry("rich", [40, 0, 0, 0, 0], 30);
    let params = PoffinParams {
        time: 10.0,
        mistakes: 0,
    };
    let result = blend(&[&berry, &berry, &berry], &params).unwrap();
    assert_eq!(result.stats.spicy, 99);
    assert!(result.stats.to_array().iter().all(|&v| v <= 99));
}

#[test]
fn test_feel_drops_with_more_berries() {
    let berry = make_berry("plain", [10, 10, 0, 0, 0], 30);
    let mut previous = i32::MAX;
    for n in 1..=8 {
        let berries: Vec<&Berry> = std::iter::repeat(&berry).take(n).collect();
        let feel = blend(&berries, &PoffinParams::default()).unwrap().feel;
        assert_eq!(feel, 30 - n as i32);
        assert!(feel < previous);
        previous = feel;
    }
}

#[test]
fn test_flags_are_or_aggregated() {
    let plain = make_berry("plain", [10, 0, 0, 0, 0], 20);
    let rare = make_berry("rare", [0, 10, 0, 0, 0], 20).with_flags(BerryFlags {
        battle_rare: true,
        damage: true,
        ..Default::default()
    });

    let result = blend(&[&plain, &rare], &PoffinParams::default()).unwrap();
    assert!(result.flags.battle_rare);
    assert!(result.flags.damage);
    assert!(!result.flags.event);
    assert!(!result.flags.frontier);
}

#[test]
fn test_identical_calls_identical_results() {
    let a = spicy_sour();
    let b = make_berry("other", [0, 15, 5, -3, 20], 40);
    let params = PoffinParams {
        time: 47.3,
        mistakes: 2,
    };
    let first = blend(&[&a, &b], &params).unwrap();
    let second = blend(&[&a, &b], &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_list_is_invalid() {
    let result = blend(&[], &PoffinParams::default());
    assert!(matches!(result, Err(BlendError::InvalidInput(_))));
}

#[test]
fn test_extreme_times_stay_in_range() {
    let a = spicy_sour();
    let b = make_berry("mild", [5, 0, 0, 3, 0], 30);

    for time in [1e-300, f64::MIN_POSITIVE, 1e-3, 1e12, 1e300, f64::MAX] {
        let params = PoffinParams { time, mistakes: 0 };
        let result = blend(&[&a, &b], &params).unwrap();
        assert!(result.stats.to_array().iter().all(|&v| v <= 99));
    }

    let tiny = PoffinParams {
        time: 1e-300,
        mistakes: 0,
    };
    let result = blend(&[&a, &b], &tiny).unwrap();
    // raw spicy 15, bitter 3, sour -10: one negative axis
    assert_eq!(result.stats.spicy, 99);
    assert_eq!(result.stats.bitter, 99);
    assert_eq!(result.stats.sour, 0);
    assert_eq!(result.stats.dry, 0);

    let glacial = PoffinParams {
        time: f64::MAX,
        mistakes: 0,
    };
    assert_eq!(blend(&[&a, &b], &glacial).unwrap().stats.to_array(), [0; 5]);
}

#[test]
fn test_extreme_levels_do_not_overflow() {
    let big = make_berry("big", [i32::MAX, i32::MIN, 0, 0, 0], 30);
    let result = blend(&[&big, &big], &PoffinParams::default()).unwrap();
    assert_eq!(result.stats.spicy, 99);
    assert_eq!(result.stats.dry, 0);
}

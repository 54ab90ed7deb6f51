use proptest::prelude::*;
use punish_core::{
    CalculationOptions, Fighter, Move, MoveCategory, MoveRange, MovementData, ShieldData,
    StalenessLevel, calculate_frame_advantage, enumerate_punishes, shield_stun,
};
use strum::IntoEnumIterator;

fn staleness() -> impl Strategy<Value = StalenessLevel> {
    (0usize..=12).prop_map(StalenessLevel::from_count)
}

fn category() -> impl Strategy<Value = MoveCategory> {
    prop::sample::select(MoveCategory::iter().collect::<Vec<_>>())
}

fn range() -> impl Strategy<Value = MoveRange> {
    prop::sample::select(MoveRange::iter().collect::<Vec<_>>())
}

fn any_move() -> impl Strategy<Value = Move> {
    (
        category(),
        range(),
        1i32..40,
        1i32..10,
        0i32..60,
        0.0f64..30.0,
        prop::sample::select(vec!["upsmash", "upb", "forward", "down", "neutral"]),
    )
        .prop_map(|(category, range, startup, active, recovery, damage, name)| {
            Move::new(name, category, startup, active, recovery, damage, range)
        })
}

fn any_fighter() -> impl Strategy<Value = Fighter> {
    (prop::collection::vec(any_move(), 0..12), 1i32..8)
        .prop_map(|(moves, jump_squat)| {
            Fighter::new(
                "generated",
                moves,
                ShieldData::new(50.0, 0.07, 11),
                MovementData::new(jump_squat),
            )
        })
}

proptest! {
    /// Property: shield stun never drops below the 2-frame minimum
    #[test]
    fn prop_shield_stun_has_floor(damage in -50.0f64..100.0, level in staleness()) {
        prop_assert!(shield_stun(damage, level) >= 2);
    }

    /// Property: staler hits never cause more shield stun
    #[test]
    fn prop_shield_stun_non_increasing_with_staleness(damage in 0.0f64..1000.0) {
        let stuns: Vec<i32> = StalenessLevel::iter().map(|level| shield_stun(damage, level)).collect();
        for pair in stuns.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    /// Property: perfect shield is exactly four frames better
    #[test]
    fn prop_perfect_shield_bonus(attack in any_move(), release in 0i32..20, level in staleness()) {
        let normal = calculate_frame_advantage(&attack, release, level, false);
        let perfect = calculate_frame_advantage(&attack, release, level, true);
        prop_assert_eq!(perfect.frame_advantage, normal.frame_advantage + 4);
    }

    /// Property: every punish fits the window, is guaranteed iff strictly
    /// inside it, and has a probability in [0, 1]
    #[test]
    fn prop_enumerated_punishes_fit_window(fighter in any_fighter(), window in -10i32..60) {
        let punishes = enumerate_punishes(&fighter, window, &CalculationOptions::default());
        if window <= 0 {
            prop_assert!(punishes.is_empty());
        }
        for punish in &punishes {
            prop_assert!(punish.total_frames <= window);
            prop_assert_eq!(punish.is_guaranteed, punish.total_frames < window);
            prop_assert!((0.0..=1.0).contains(&punish.probability));
        }
        prop_assert!(punishes.windows(2).all(|w| w[0].total_frames <= w[1].total_frames));
    }
}

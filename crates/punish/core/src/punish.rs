//! Punish enumeration for a shielding defender.
//!
//! Candidates come from two independent branches:
//!
//! - **Guard cancel**: up smash, up special and grab come straight out of
//!   shield, and every aerial comes out after jump squat. None of them pay the
//!   shield-release lag.
//! - **Guard release**: every other move, started after dropping shield.
//!
//! A candidate is emitted only if its hitbox arrives within the advantage
//! window. It is guaranteed only if it arrives strictly before the window
//! closes.

use crate::config::EngineConstants;
use crate::error::PunishError;
use crate::frame::calculate_frame_advantage;
use crate::model::{
    CalculationContext, CalculationOptions, Fighter, Move, PunishMethod, PunishMove, PunishResult,
};

/// Heuristic likelihood of landing a punish.
///
/// ```text
/// probability = min(1, min(1, slack / 5) + effectiveness / 10)
/// ```
///
/// where `slack = advantage_frames - total_frames`.
pub fn punish_probability(advantage_frames: i32, total_frames: i32, effectiveness: u8) -> f64 {
    let slack = f64::from(advantage_frames.saturating_sub(total_frames));
    let timing = (slack / EngineConstants::PROBABILITY_SLACK_FRAMES).min(1.0);
    (timing + f64::from(effectiveness) / 10.0).min(1.0)
}

fn candidate<'a>(
    punish_move: &'a Move,
    method: PunishMethod,
    total_frames: i32,
    advantage_frames: i32,
) -> PunishMove<'a> {
    let punish = PunishMove {
        punish_move,
        method,
        total_frames,
        is_guaranteed: total_frames < advantage_frames,
        probability: punish_probability(advantage_frames, total_frames, method.effectiveness()),
        damage: punish_move.base_damage(),
        kill_percent: punish_move.properties.kill_percent,
        guard_action_type: method.guard_action(),
        notes: format!(
            "{}: {} hits on frame {}",
            method.label(),
            punish_move.display_name,
            total_frames
        ),
    };
    tracing::trace!(
        move_id = %punish_move.id,
        method = %method,
        total_frames,
        advantage_frames,
        "punish candidate"
    );
    punish
}

fn guard_cancel_candidates<'a>(
    defender: &'a Fighter,
    advantage_frames: i32,
    out: &mut Vec<PunishMove<'a>>,
) {
    let direct: [(PunishMethod, fn(&Move) -> bool); 3] = [
        (PunishMethod::GuardCancelUpSmash, Move::is_up_smash),
        (PunishMethod::GuardCancelUpB, Move::is_up_special),
        (PunishMethod::GuardCancelGrab, Move::is_grab),
    ];

    for (method, matches) in direct {
        if let Some(mv) = defender.first_move_where(matches) {
            if mv.startup <= advantage_frames {
                out.push(candidate(mv, method, mv.startup, advantage_frames));
            }
        }
    }

    let jump_squat = defender.movement_data.jump_squat;
    for mv in defender.moves.iter().filter(|mv| mv.is_aerial()) {
        let total_frames = jump_squat.saturating_add(mv.startup);
        if total_frames <= advantage_frames {
            out.push(candidate(
                mv,
                PunishMethod::GuardCancelJump,
                total_frames,
                advantage_frames,
            ));
        }
    }
}

fn guard_release_candidates<'a>(
    defender: &'a Fighter,
    advantage_frames: i32,
    out: &mut Vec<PunishMove<'a>>,
) {
    let releasable = defender
        .moves
        .iter()
        .filter(|mv| !mv.is_grab() && !mv.is_up_smash() && !mv.is_up_special() && !mv.is_aerial());

    for mv in releasable {
        let total_frames = EngineConstants::SHIELD_RELEASE_FRAMES.saturating_add(mv.startup);
        if total_frames <= advantage_frames {
            out.push(candidate(
                mv,
                PunishMethod::OutOfShield,
                total_frames,
                advantage_frames,
            ));
        }
    }
}

/// Whether a candidate passes the per-move option filters used by enumeration.
fn passes_enumeration_filter(punish: &PunishMove<'_>, options: &CalculationOptions) -> bool {
    punish.damage >= options.minimum_damage
        && (!options.only_guaranteed || punish.is_guaranteed)
        && options.range_filter.contains(&punish.range())
}

/// Enumerate the defender's responses that fit in `advantage_frames`.
///
/// `advantage_frames` is the clamped punish window (`max(0, frame_advantage)`).
/// The result is filtered by `options` and ordered fastest first; candidates
/// with equal timing keep their enumeration order.
pub fn enumerate_punishes<'a>(
    defender: &'a Fighter,
    advantage_frames: i32,
    options: &CalculationOptions,
) -> Vec<PunishMove<'a>> {
    if advantage_frames <= 0 {
        return Vec::new();
    }

    let mut punishes = Vec::new();
    guard_cancel_candidates(defender, advantage_frames, &mut punishes);
    guard_release_candidates(defender, advantage_frames, &mut punishes);

    punishes.retain(|punish| passes_enumeration_filter(punish, options));
    punishes.sort_by_key(|punish| punish.total_frames);
    punishes
}

/// Reject an attacking move whose damage is not a finite number.
pub fn validate_attack(attack: &Move) -> Result<(), PunishError> {
    match attack.damage.non_finite() {
        Some(value) => Err(PunishError::NonFiniteAttackDamage {
            move_id: attack.id.clone(),
            value,
        }),
        None => Ok(()),
    }
}

/// Reject a fighter with non-finite damage or kill percent on any move.
pub fn validate_fighter(fighter: &Fighter) -> Result<(), PunishError> {
    for mv in &fighter.moves {
        if let Some(value) = mv.damage.non_finite() {
            return Err(PunishError::NonFiniteDamage {
                fighter: fighter.id.clone(),
                move_id: mv.id.clone(),
                value,
            });
        }
        if let Some(value) = mv.properties.kill_percent.filter(|pct| !pct.is_finite()) {
            return Err(PunishError::NonFiniteKillPercent {
                fighter: fighter.id.clone(),
                move_id: mv.id.clone(),
                value,
            });
        }
    }
    Ok(())
}

/// Compute one defender's punish result against `attack`.
///
/// Runs the frame advantage calculation with the defender's shield release
/// frames, then enumerates punishes in the clamped window filtered by
/// `options`.
pub fn calculate_punishes<'a>(
    attack: &'a Move,
    defender: &'a Fighter,
    options: &CalculationOptions,
) -> Result<PunishResult<'a>, PunishError> {
    validate_attack(attack)?;
    validate_fighter(defender)?;

    let advantage = calculate_frame_advantage(
        attack,
        defender.shield_data.shield_release_frames,
        options.staleness,
        options.perfect_shield,
    );
    let punishing_moves = enumerate_punishes(defender, advantage.punish_window(), options);

    Ok(PunishResult {
        defending_fighter: defender,
        punishing_moves,
        frame_advantage: advantage.frame_advantage,
        attacking_move: attack,
        calculation_context: CalculationContext {
            staleness: options.staleness,
            shield_stun: advantage.shield_stun,
            shield_damage: advantage.shield_damage,
            range: attack.range,
            position: options.position_filter,
            options: options.clone(),
        },
    })
}

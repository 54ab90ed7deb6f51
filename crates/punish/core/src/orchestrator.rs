//! Roster-wide punish calculation.
//!
//! For every defender the engine first enumerates with unrestricted options,
//! then applies the caller's options as a second filter and re-sorts the
//! survivors for display: guaranteed punishes first, then by damage.
//!
//! Two entry points differ only in how a failing defender is handled:
//!
//! - [`calculate_punish_options`] aborts the whole batch on the first failure.
//! - [`calculate_punish_options_isolated`] records the failure and continues.

use std::cmp::Ordering;

use crate::error::{CalculationError, PunishError};
use crate::model::{CalculationOptions, Fighter, Move, PunishMove, PunishResult};
use crate::punish::calculate_punishes;

/// Results of an isolated batch: successes and per-defender failures.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchOutcome<'a> {
    pub results: Vec<PunishResult<'a>>,
    /// `(defender id, error)` for every defender that could not be processed.
    pub failures: Vec<(String, PunishError)>,
}

impl BatchOutcome<'_> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Caller-facing filter applied after enumeration.
///
/// The frame advantage bound is checked against the result's single value,
/// not per move.
fn passes_caller_filter(
    punish: &PunishMove<'_>,
    frame_advantage: i32,
    options: &CalculationOptions,
) -> bool {
    punish.damage >= options.minimum_damage
        && options.allows_frame_advantage(frame_advantage)
        && (!options.only_guaranteed || punish.is_guaranteed)
        && (options.include_kill_moves || !punish.is_kill_move())
        && options.range_filter.contains(&punish.range())
}

/// Display order: guaranteed first, then damage descending.
fn display_order(a: &PunishMove<'_>, b: &PunishMove<'_>) -> Ordering {
    b.is_guaranteed
        .cmp(&a.is_guaranteed)
        .then_with(|| b.damage.total_cmp(&a.damage))
}

fn warn_reserved_options(options: &CalculationOptions) {
    if options.uses_reserved_options() {
        tracing::warn!(
            include_di_options = options.include_di_options,
            include_sdi_options = options.include_sdi_options,
            "DI/SDI options are not consumed by punish enumeration"
        );
    }
}

/// Compute one defender's filtered, display-ordered result.
///
/// Returns `Ok(None)` when no punish survives the caller's filter.
fn punish_for_defender<'a>(
    attacking_move: &'a Move,
    defender: &'a Fighter,
    options: &CalculationOptions,
) -> Result<Option<PunishResult<'a>>, PunishError> {
    let internal = CalculationOptions::unrestricted_from(options);
    let mut result = calculate_punishes(attacking_move, defender, &internal)?;
    let candidates = result.punishing_moves.len();

    let frame_advantage = result.frame_advantage;
    result
        .punishing_moves
        .retain(|punish| passes_caller_filter(punish, frame_advantage, options));
    result.punishing_moves.sort_by(display_order);

    tracing::debug!(
        defender = %defender.id,
        frame_advantage,
        candidates,
        surviving = result.punishing_moves.len(),
        "evaluated defender"
    );

    Ok(result.has_punish().then_some(result))
}

/// Calculate punish options for every defender against one attack.
///
/// Only defenders with at least one surviving punish are returned, in roster
/// order. The first defender that fails aborts the batch and no partial
/// results are returned.
pub fn calculate_punish_options<'a>(
    attacking_fighter: &Fighter,
    attacking_move: &'a Move,
    defenders: &'a [Fighter],
    options: &CalculationOptions,
) -> Result<Vec<PunishResult<'a>>, CalculationError> {
    tracing::debug!(
        attacker = %attacking_fighter.id,
        attack = %attacking_move.id,
        defenders = defenders.len(),
        staleness = %options.staleness,
        "calculating punish options"
    );
    warn_reserved_options(options);

    let mut results = Vec::new();
    for defender in defenders {
        let outcome = punish_for_defender(attacking_move, defender, options).map_err(|source| {
            CalculationError::CalculationFailed {
                defender: defender.id.clone(),
                source,
            }
        })?;
        results.extend(outcome);
    }
    Ok(results)
}

/// Like [`calculate_punish_options`], but a failing defender is recorded in
/// [`BatchOutcome::failures`] and the remaining defenders are still processed.
pub fn calculate_punish_options_isolated<'a>(
    attacking_fighter: &Fighter,
    attacking_move: &'a Move,
    defenders: &'a [Fighter],
    options: &CalculationOptions,
) -> BatchOutcome<'a> {
    tracing::debug!(
        attacker = %attacking_fighter.id,
        attack = %attacking_move.id,
        defenders = defenders.len(),
        "calculating punish options (isolated)"
    );
    warn_reserved_options(options);

    let mut outcome = BatchOutcome::default();
    for defender in defenders {
        match punish_for_defender(attacking_move, defender, options) {
            Ok(result) => outcome.results.extend(result),
            Err(err) => {
                tracing::warn!(defender = %defender.id, error = %err, "skipping defender");
                outcome.failures.push((defender.id.clone(), err));
            }
        }
    }
    outcome
}

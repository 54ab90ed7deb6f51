//! Convenience queries over frame advantage and punish results.

use std::cmp::Ordering;

use crate::frame::calculate_frame_advantage;
use crate::model::{Move, PunishMove, PunishResult};
use crate::staleness::StalenessLevel;

/// Whether `attack` leaves a non-negative frame advantage on a normal shield.
pub fn is_move_safe(attack: &Move, shield_release_frames: i32, staleness: StalenessLevel) -> bool {
    calculate_frame_advantage(attack, shield_release_frames, staleness, false).frame_advantage >= 0
}

/// Top guaranteed punishes: kill moves first, then damage descending.
pub fn best_punish_options<'a>(result: &PunishResult<'a>, max_results: usize) -> Vec<PunishMove<'a>> {
    let mut guaranteed: Vec<PunishMove<'a>> = result
        .punishing_moves
        .iter()
        .filter(|punish| punish.is_guaranteed)
        .cloned()
        .collect();

    guaranteed.sort_by(|a, b| match (a.is_kill_move(), b.is_kill_move()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.damage.total_cmp(&a.damage),
    });
    guaranteed.truncate(max_results);
    guaranteed
}

//! Frame advantage of an attack blocked by shield.
//!
//! # Formula
//!
//! ```text
//! attacker_exposed = total_frames - startup - active
//! defender_window  = shield_stun + shield_release_frames
//! frame_advantage  = defender_window - attacker_exposed   (+4 on perfect shield)
//! ```
//!
//! A positive value means the defender acts first and the attack can be
//! punished.

use crate::config::EngineConstants;
use crate::model::Move;
use crate::staleness::{StalenessLevel, shield_damage, shield_stun};

/// Breakdown of a frame advantage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameAdvantage {
    pub frame_advantage: i32,
    pub shield_stun: i32,
    pub shield_damage: i32,
    pub defender_window: i32,
    pub attacker_exposed_frames: i32,
}

impl FrameAdvantage {
    /// Defender acts first.
    pub const fn is_advantage(&self) -> bool {
        self.frame_advantage > 0
    }

    /// Attacker acts first.
    pub const fn is_disadvantage(&self) -> bool {
        self.frame_advantage < 0
    }

    pub const fn is_neutral(&self) -> bool {
        self.frame_advantage == 0
    }

    /// Frames available to the defender for a punish, never negative.
    pub fn punish_window(&self) -> i32 {
        self.frame_advantage.max(0)
    }
}

/// Calculate the frame advantage of `attack` against a shield.
///
/// Always returns a value, including for degenerate or negative frame data.
pub fn calculate_frame_advantage(
    attack: &Move,
    shield_release_frames: i32,
    staleness: StalenessLevel,
    is_perfect_shield: bool,
) -> FrameAdvantage {
    let base_damage = attack.base_damage();
    let shield_stun = shield_stun(base_damage, staleness);
    let shield_damage = shield_damage(base_damage, staleness);

    let attacker_exposed_frames = attack.exposed_frames();
    let defender_window = shield_stun.saturating_add(shield_release_frames);

    let mut frame_advantage = defender_window.saturating_sub(attacker_exposed_frames);
    if is_perfect_shield {
        frame_advantage = frame_advantage.saturating_add(EngineConstants::PERFECT_SHIELD_BONUS);
    }

    FrameAdvantage {
        frame_advantage,
        shield_stun,
        shield_damage,
        defender_window,
        attacker_exposed_frames,
    }
}

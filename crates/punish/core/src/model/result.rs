//! Computed punish candidates and per-defender results.
//!
//! Results borrow the [`Fighter`] and [`Move`] records they were computed
//! from. They are built fresh for every call and never stored by the engine.

use super::fighter::Fighter;
use super::moves::{Move, MoveRange};
use super::options::{CalculationOptions, StagePosition};
use crate::staleness::StalenessLevel;

/// How the defender reaches its response out of shield.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum PunishMethod {
    GuardCancelUpSmash,
    GuardCancelUpB,
    GuardCancelGrab,
    GuardCancelJump,
    OutOfShield,
}

impl PunishMethod {
    /// Branch this method belongs to.
    pub const fn guard_action(self) -> GuardActionType {
        match self {
            Self::OutOfShield => GuardActionType::GuardRelease,
            _ => GuardActionType::GuardCancel,
        }
    }

    /// Reliability weight of the technique, out of 10.
    pub const fn effectiveness(self) -> u8 {
        match self {
            Self::GuardCancelUpSmash | Self::GuardCancelUpB | Self::GuardCancelGrab => {
                crate::EngineConstants::GUARD_CANCEL_EFFECTIVENESS
            }
            Self::GuardCancelJump => crate::EngineConstants::JUMP_CANCEL_EFFECTIVENESS,
            Self::OutOfShield => crate::EngineConstants::SHIELD_RELEASE_EFFECTIVENESS,
        }
    }

    /// Human-readable label used in notes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GuardCancelUpSmash => "Guard cancel up smash",
            Self::GuardCancelUpB => "Guard cancel up special",
            Self::GuardCancelGrab => "Guard cancel grab",
            Self::GuardCancelJump => "Jump-cancelled aerial",
            Self::OutOfShield => "Shield drop",
        }
    }
}

/// Whether a response skips the shield-release lag or pays it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GuardActionType {
    GuardCancel,
    GuardRelease,
}

/// A candidate defender response.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PunishMove<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    pub punish_move: &'a Move,
    pub method: PunishMethod,
    /// Frames until the response's hitbox comes out.
    pub total_frames: i32,
    pub is_guaranteed: bool,
    /// Heuristic likelihood in `[0, 1]`.
    pub probability: f64,
    pub damage: f64,
    pub kill_percent: Option<f64>,
    pub guard_action_type: GuardActionType,
    pub notes: String,
}

impl PunishMove<'_> {
    pub fn is_kill_move(&self) -> bool {
        self.punish_move.properties.is_kill_move
    }

    pub fn range(&self) -> MoveRange {
        self.punish_move.range
    }
}

/// Inputs and derived shield values a result was computed with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalculationContext {
    pub staleness: StalenessLevel,
    pub shield_stun: i32,
    pub shield_damage: i32,
    /// Range of the attacking move.
    pub range: MoveRange,
    pub position: Option<StagePosition>,
    pub options: CalculationOptions,
}

/// One defender's punish options against one attack.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PunishResult<'a> {
    pub defending_fighter: &'a Fighter,
    pub punishing_moves: Vec<PunishMove<'a>>,
    /// Signed advantage; positive means the defender acts first.
    pub frame_advantage: i32,
    pub attacking_move: &'a Move,
    pub calculation_context: CalculationContext,
}

impl PunishResult<'_> {
    pub fn has_punish(&self) -> bool {
        !self.punishing_moves.is_empty()
    }

    pub fn guaranteed_count(&self) -> usize {
        self.punishing_moves
            .iter()
            .filter(|punish| punish.is_guaranteed)
            .count()
    }
}

//! Fighter records: identity, physics constants, shield and movement data.

use super::moves::Move;

/// Ground and air movement constants.
///
/// Carried for callers that display or export them; the punish engine does
/// not read these values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Locomotion {
    pub weight: f64,
    pub walk_speed: f64,
    pub run_speed: f64,
    pub air_speed: f64,
    pub fall_speed: f64,
    pub fast_fall_speed: f64,
    pub gravity: f64,
}

/// Shield parameters of a fighter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldData {
    pub shield_health: f64,
    pub shield_regen: f64,
    /// Fixed lag between dropping shield and acting.
    pub shield_release_frames: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub out_of_shield_options: Vec<String>,
}

impl ShieldData {
    pub fn new(shield_health: f64, shield_regen: f64, shield_release_frames: i32) -> Self {
        Self {
            shield_health,
            shield_regen,
            shield_release_frames,
            out_of_shield_options: Vec::new(),
        }
    }
}

/// Movement timings relevant to acting out of shield.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementData {
    /// Frames between leaving the ground and being airborne.
    pub jump_squat: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_jumps: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub air_dodge_frames: Option<i32>,
}

impl MovementData {
    pub fn new(jump_squat: i32) -> Self {
        Self {
            jump_squat,
            air_jumps: None,
            air_dodge_frames: None,
        }
    }
}

/// A playable character and its moveset.
///
/// `shield_data` and `movement_data` feed the frame math, so a record that
/// omits either one fails to deserialize.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub series: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub locomotion: Option<Locomotion>,
    pub moves: Vec<Move>,
    pub shield_data: ShieldData,
    pub movement_data: MovementData,
}

impl Fighter {
    /// Creates a fighter named after its id, without locomotion constants.
    pub fn new(
        id: impl Into<String>,
        moves: Vec<Move>,
        shield_data: ShieldData,
        movement_data: MovementData,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            display_name: id.clone(),
            id,
            series: String::new(),
            locomotion: None,
            moves,
            shield_data,
            movement_data,
        }
    }

    /// Sets the jump squat (builder pattern).
    #[must_use]
    pub fn with_jump_squat(mut self, jump_squat: i32) -> Self {
        self.movement_data.jump_squat = jump_squat;
        self
    }

    /// Sets the shield release frames (builder pattern).
    #[must_use]
    pub fn with_shield_release_frames(mut self, frames: i32) -> Self {
        self.shield_data.shield_release_frames = frames;
        self
    }

    /// Looks up a move by id.
    pub fn find_move(&self, move_id: &str) -> Option<&Move> {
        self.moves.iter().find(|mv| mv.id == move_id)
    }

    /// First move in moveset order matching `predicate`.
    pub(crate) fn first_move_where(&self, predicate: impl Fn(&Move) -> bool) -> Option<&Move> {
        self.moves.iter().find(|mv| predicate(mv))
    }
}

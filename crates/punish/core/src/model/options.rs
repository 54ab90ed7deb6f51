//! Per-request calculation options.

use std::collections::BTreeSet;

use strum::IntoEnumIterator;

use super::moves::MoveRange;
use crate::staleness::StalenessLevel;

/// Stage position of the exchange.
///
/// Recorded in [`crate::CalculationContext`]; enumeration does not depend on it.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StagePosition {
    Center,
    Ledge,
    Platform,
}

/// Options controlling one punish calculation.
///
/// [`CalculationOptions::default`] is the unrestricted option set: every range,
/// unbounded frame advantage, no minimum damage and kill moves included.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculationOptions {
    pub staleness: StalenessLevel,
    pub range_filter: BTreeSet<MoveRange>,
    pub minimum_frame_advantage: i32,
    pub maximum_frame_advantage: i32,
    pub minimum_damage: f64,
    pub only_guaranteed: bool,
    pub include_kill_moves: bool,
    /// Apply the perfect-shield bonus to the frame advantage.
    pub perfect_shield: bool,

    /// Reserved; not consumed by enumeration.
    pub include_di_options: bool,
    /// Reserved; not consumed by enumeration.
    pub include_sdi_options: bool,
    /// Copied into the calculation context only.
    pub position_filter: Option<StagePosition>,
}

impl Default for CalculationOptions {
    fn default() -> Self {
        Self {
            staleness: StalenessLevel::None,
            range_filter: MoveRange::iter().collect(),
            minimum_frame_advantage: i32::MIN,
            maximum_frame_advantage: i32::MAX,
            minimum_damage: 0.0,
            only_guaranteed: false,
            include_kill_moves: true,
            perfect_shield: false,
            include_di_options: false,
            include_sdi_options: false,
            position_filter: None,
        }
    }
}

impl CalculationOptions {
    /// The options used for the internal enumeration pass: unrestricted, but
    /// keeping the caller's staleness, perfect-shield flag and position.
    pub fn unrestricted_from(caller: &CalculationOptions) -> Self {
        Self {
            staleness: caller.staleness,
            perfect_shield: caller.perfect_shield,
            position_filter: caller.position_filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_staleness(mut self, staleness: StalenessLevel) -> Self {
        self.staleness = staleness;
        self
    }

    #[must_use]
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = MoveRange>) -> Self {
        self.range_filter = ranges.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_minimum_damage(mut self, minimum_damage: f64) -> Self {
        self.minimum_damage = minimum_damage;
        self
    }

    #[must_use]
    pub fn with_frame_advantage_bounds(mut self, minimum: i32, maximum: i32) -> Self {
        self.minimum_frame_advantage = minimum;
        self.maximum_frame_advantage = maximum;
        self
    }

    #[must_use]
    pub fn guaranteed_only(mut self) -> Self {
        self.only_guaranteed = true;
        self
    }

    #[must_use]
    pub fn without_kill_moves(mut self) -> Self {
        self.include_kill_moves = false;
        self
    }

    #[must_use]
    pub fn with_perfect_shield(mut self) -> Self {
        self.perfect_shield = true;
        self
    }

    /// Whether `frame_advantage` lies within the configured inclusive bounds.
    pub fn allows_frame_advantage(&self, frame_advantage: i32) -> bool {
        (self.minimum_frame_advantage..=self.maximum_frame_advantage).contains(&frame_advantage)
    }

    /// Whether any reserved option is switched on.
    pub fn uses_reserved_options(&self) -> bool {
        self.include_di_options || self.include_sdi_options
    }
}

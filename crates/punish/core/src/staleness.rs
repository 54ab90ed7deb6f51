//! Staleness levels and shield interaction formulas.
//!
//! Recently landed moves are weakened. The weakening scales the damage that
//! feeds both formulas below:
//!
//! ```text
//! shield_stun   = max(2, floor(damage × multiplier × 0.8665 + 2))
//! shield_damage = floor(damage × multiplier × 0.7 + 1)
//! ```

use crate::config::EngineConstants;

/// How many times a move appears in the recent-hit queue.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum StalenessLevel {
    #[default]
    None = 0,
    Stale1 = 1,
    Stale2 = 2,
    Stale3 = 3,
    Stale4 = 4,
    Stale5 = 5,
    Stale6 = 6,
    Stale7 = 7,
    Stale8 = 8,
    Stale9 = 9,
}

impl StalenessLevel {
    /// Level for a move that occurs `count` times in the queue (saturates at 9).
    pub fn from_count(count: usize) -> Self {
        let clamped = count.min(Self::Stale9 as usize) as u8;
        Self::from_repr(clamped).unwrap_or(Self::Stale9)
    }

    /// Damage multiplier: 1.00 when fresh, 0.01 less per level.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::None => 1.00,
            Self::Stale1 => 0.99,
            Self::Stale2 => 0.98,
            Self::Stale3 => 0.97,
            Self::Stale4 => 0.96,
            Self::Stale5 => 0.95,
            Self::Stale6 => 0.94,
            Self::Stale7 => 0.93,
            Self::Stale8 => 0.92,
            Self::Stale9 => 0.91,
        }
    }
}

/// Shield stun inflicted by a hit of `damage` at the given staleness.
///
/// Never below [`EngineConstants::MIN_SHIELD_STUN`], including for zero or
/// negative damage.
pub fn shield_stun(damage: f64, staleness: StalenessLevel) -> i32 {
    let raw = damage * staleness.multiplier() * EngineConstants::SHIELD_STUN_MULTIPLIER
        + EngineConstants::SHIELD_STUN_OFFSET;
    (raw.floor() as i32).max(EngineConstants::MIN_SHIELD_STUN)
}

/// Shield health removed by a hit of `damage` at the given staleness.
pub fn shield_damage(damage: f64, staleness: StalenessLevel) -> i32 {
    let raw = damage * staleness.multiplier() * EngineConstants::SHIELD_DAMAGE_MULTIPLIER
        + EngineConstants::SHIELD_DAMAGE_OFFSET;
    raw.floor() as i32
}

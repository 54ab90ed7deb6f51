/// Fixed frame-data constants used by the punish engine.
///
/// These are game rules rather than tunables; per-request knobs live in
/// [`crate::CalculationOptions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConstants;

impl EngineConstants {
    // ===== shield interaction =====
    /// Lag before a move can start after dropping shield.
    pub const SHIELD_RELEASE_FRAMES: i32 = 11;
    /// Flat bonus granted by a perfect (parry) shield.
    pub const PERFECT_SHIELD_BONUS: i32 = 4;
    pub const SHIELD_STUN_MULTIPLIER: f64 = 0.8665;
    pub const SHIELD_STUN_OFFSET: f64 = 2.0;
    pub const MIN_SHIELD_STUN: i32 = 2;
    pub const SHIELD_DAMAGE_MULTIPLIER: f64 = 0.7;
    pub const SHIELD_DAMAGE_OFFSET: f64 = 1.0;

    // ===== probability heuristic =====
    /// Frames of slack that saturate the timing component.
    pub const PROBABILITY_SLACK_FRAMES: f64 = 5.0;
    pub const GUARD_CANCEL_EFFECTIVENESS: u8 = 8;
    pub const JUMP_CANCEL_EFFECTIVENESS: u8 = 7;
    pub const SHIELD_RELEASE_EFFECTIVENESS: u8 = 5;

    // ===== staleness =====
    /// Length of the recently-landed move queue.
    pub const STALENESS_QUEUE_SIZE: usize = 9;
}

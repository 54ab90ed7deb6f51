//! Shield punish calculation engine.
//!
//! `punish-core` answers one question: when an attack is blocked by shield,
//! what can each defender do before the attacker recovers? It exposes pure
//! functions only. Every call derives its results from its arguments and
//! keeps no state, so overlapping calls are independent and a caller issuing
//! rapid re-calculations simply keeps the latest result.
//!
//! # Pipeline
//!
//! ```text
//! attack Move + defender Fighter
//!     → frame::calculate_frame_advantage     (shield stun vs. attacker recovery)
//!     → punish::enumerate_punishes           (guard cancel / guard release)
//!     → orchestrator::calculate_punish_options (caller filter, display order)
//! ```
//!
//! The staleness queue in [`tracker`] is independent of the pipeline; callers
//! use it to derive the [`StalenessLevel`] they pass in [`CalculationOptions`].
pub mod config;
pub mod error;
pub mod frame;
pub mod model;
pub mod orchestrator;
pub mod predicates;
pub mod punish;
pub mod staleness;
pub mod tracker;

pub use config::EngineConstants;
pub use error::{CalculationError, ErrorSeverity, PunishError};
pub use frame::{FrameAdvantage, calculate_frame_advantage};
pub use model::{
    CalculationContext, CalculationOptions, Damage, Fighter, GuardActionType, Locomotion, Move,
    MoveCategory, MoveDirection, MoveProperties, MoveRange, MovementData, PunishMethod, PunishMove,
    PunishResult, ShieldData, StagePosition,
};
pub use orchestrator::{BatchOutcome, calculate_punish_options, calculate_punish_options_isolated};
pub use predicates::{best_punish_options, is_move_safe};
pub use punish::{calculate_punishes, enumerate_punishes, punish_probability};
pub use staleness::{StalenessLevel, shield_damage, shield_stun};
pub use tracker::{StalenessQueue, push_staleness, staleness_level_of};

//! Input records (fighters, moves, options) and computed results.

pub mod fighter;
pub mod moves;
pub mod options;
pub mod result;

pub use fighter::{Fighter, Locomotion, MovementData, ShieldData};
pub use moves::{Damage, Move, MoveCategory, MoveDirection, MoveProperties, MoveRange};
pub use options::{CalculationOptions, StagePosition};
pub use result::{CalculationContext, GuardActionType, PunishMethod, PunishMove, PunishResult};

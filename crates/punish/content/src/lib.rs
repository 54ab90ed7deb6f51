//! Data-driven fighter content and loaders.
//!
//! This crate reads the records the punish engine consumes:
//! - Fighter rosters (RON, one file or one file per fighter)
//! - Calculation options (TOML)
//!
//! Records are deserialized straight into `punish-core` types and are not
//! validated beyond what deserialization enforces.

pub mod loaders;
pub mod roster;

pub use loaders::{LoadResult, OptionsLoader, RosterLoader};
pub use roster::Roster;

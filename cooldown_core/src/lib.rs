//! cooldown_core - Turn-based skill cooldowns for battle participants
//!
//! This library provides:
//! - CooldownSetupTable: Which skills a trigger skill puts on cooldown
//! - CooldownEntry: Remaining turns of a single skill's cooldown
//! - ParticipantCooldowns: All cooldowns of one actor or enemy
//! - CooldownManager: Cooldown state for a whole battle

pub mod battler;
pub mod config;
pub mod cooldown;
pub mod display;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use battler::{BattleRoster, CooldownAware};
pub use config::{
    default_settings, ConfigError, CooldownSettings, CooldownSetup, CooldownSetupEntry,
    CooldownSetupTable,
};
pub use cooldown::{CooldownEntry, CooldownManager, ParticipantCooldowns};
pub use display::{CooldownDisplay, CooldownLabel};
pub use types::{ActorId, EnemyIndex, Participant, SkillId};

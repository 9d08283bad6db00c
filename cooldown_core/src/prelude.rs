//! Prelude module for convenient imports
//!
//! ```rust
//! use cooldown_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ActorId, EnemyIndex, Participant, SkillId};

// Cooldown tracking
pub use crate::cooldown::{CooldownEntry, CooldownManager, ParticipantCooldowns};

// Host integration
pub use crate::battler::{BattleRoster, CooldownAware};

// Config
pub use crate::config::{default_settings, CooldownSettings, CooldownSetupTable};
pub use crate::display::{CooldownDisplay, CooldownLabel};

//! Skill cooldown tracking

mod entry;
mod manager;
mod participant;

pub use entry::CooldownEntry;
pub use manager::CooldownManager;
pub use participant::ParticipantCooldowns;

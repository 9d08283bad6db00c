//! Identifier types shared across the cooldown engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Database id of a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub u32);

impl From<u32> for SkillId {
    fn from(id: u32) -> Self {
        SkillId(id)
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skill#{}", self.0)
    }
}

/// Persistent actor id (stable across battles)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u32);

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        ActorId(id)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Position of an enemy within the current troop.
///
/// Only meaningful for the battle it was taken from; indices are reassigned
/// every time a new troop is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnemyIndex(pub usize);

impl From<usize> for EnemyIndex {
    fn from(index: usize) -> Self {
        EnemyIndex(index)
    }
}

impl fmt::Display for EnemyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy[{}]", self.0)
    }
}

/// A battle participant whose cooldowns are tracked independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    Actor(ActorId),
    Enemy(EnemyIndex),
}

impl From<ActorId> for Participant {
    fn from(id: ActorId) -> Self {
        Participant::Actor(id)
    }
}

impl From<EnemyIndex> for Participant {
    fn from(index: EnemyIndex) -> Self {
        Participant::Enemy(index)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Actor(id) => id.fmt(f),
            Participant::Enemy(index) => index.fmt(f),
        }
    }
}

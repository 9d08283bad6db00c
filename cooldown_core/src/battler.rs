//! Interfaces the host battle system implements for the cooldown engine

use crate::types::{ActorId, EnemyIndex, Participant};

/// A battler whose skill use is subject to cooldowns.
///
/// Implemented by the host game's actor and enemy types so the
/// [`CooldownManager`](crate::cooldown::CooldownManager) can resolve which
/// cooldown state belongs to it.
pub trait CooldownAware {
    fn participant(&self) -> Participant;
}

impl CooldownAware for Participant {
    fn participant(&self) -> Participant {
        *self
    }
}

impl CooldownAware for ActorId {
    fn participant(&self) -> Participant {
        Participant::Actor(*self)
    }
}

impl CooldownAware for EnemyIndex {
    fn participant(&self) -> Participant {
        Participant::Enemy(*self)
    }
}

/// Party and troop queries needed at battle start and turn end
pub trait BattleRoster {
    /// Every party member, benched ones included
    fn actor_ids(&self) -> Vec<ActorId>;

    /// Indices of the enemies in the current troop
    fn enemy_indices(&self) -> Vec<EnemyIndex>;

    /// Whether the actor is currently in the active battle line-up
    fn is_battle_member(&self, actor_id: ActorId) -> bool;
}

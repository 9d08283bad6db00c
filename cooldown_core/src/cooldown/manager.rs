//! CooldownManager - Cooldown state of every participant in a battle

use super::ParticipantCooldowns;
use crate::battler::{BattleRoster, CooldownAware};
use crate::config::CooldownSetupTable;
use crate::types::{ActorId, EnemyIndex, Participant, SkillId};
use std::collections::HashMap;
use std::sync::Arc;

/// Tracks skill cooldowns for the party and the current troop.
///
/// Held by the battle session. Call [`initialize`](Self::initialize) at
/// battle start, [`setup_cooldown`](Self::setup_cooldown) after each skill
/// use, [`advance_all_turns`](Self::advance_all_turns) at each turn end and
/// [`finish`](Self::finish) when the battle is over.
#[derive(Debug, Clone)]
pub struct CooldownManager {
    table: Arc<CooldownSetupTable>,
    /// Keyed by persistent actor id
    actors: HashMap<ActorId, ParticipantCooldowns>,
    /// Keyed by troop position, rebuilt every battle
    enemies: HashMap<EnemyIndex, ParticipantCooldowns>,
    in_battle: bool,
}

impl CooldownManager {
    /// Create an empty manager outside of battle
    pub fn new(table: Arc<CooldownSetupTable>) -> Self {
        CooldownManager {
            table,
            actors: HashMap::new(),
            enemies: HashMap::new(),
            in_battle: false,
        }
    }

    /// Whether a battle is in progress
    pub fn in_battle(&self) -> bool {
        self.in_battle
    }

    /// Start a battle, discarding every cooldown from before.
    ///
    /// `actor_ids` should be the whole party, benched members included.
    pub fn initialize<A, E>(&mut self, actor_ids: A, enemy_indices: E)
    where
        A: IntoIterator<Item = ActorId>,
        E: IntoIterator<Item = EnemyIndex>,
    {
        let actors: HashMap<_, _> = actor_ids
            .into_iter()
            .map(|id| (id, ParticipantCooldowns::new()))
            .collect();
        let enemies: HashMap<_, _> = enemy_indices
            .into_iter()
            .map(|index| (index, ParticipantCooldowns::new()))
            .collect();

        log::info!(
            "Cooldowns initialized for {} actor(s) and {} enemy(ies)",
            actors.len(),
            enemies.len()
        );

        self.actors = actors;
        self.enemies = enemies;
        self.in_battle = true;
    }

    /// Start a battle using the roster's party and troop
    pub fn initialize_from<R: BattleRoster + ?Sized>(&mut self, roster: &R) {
        self.initialize(roster.actor_ids(), roster.enemy_indices());
    }

    /// End the battle. Actor cooldowns stop applying until the next battle.
    pub fn finish(&mut self) {
        if self.in_battle {
            log::info!("Cooldown tracking finished");
        }
        self.in_battle = false;
    }

    /// Start the cooldowns triggered by `participant` using a skill
    pub fn setup_cooldown(&mut self, participant: Participant, trigger_skill_id: SkillId) {
        if !self.in_battle {
            log::debug!(
                "Ignoring {} used by {} outside of battle",
                trigger_skill_id,
                participant
            );
            return;
        }

        let cooldowns = match participant {
            Participant::Actor(id) => self.actors.get_mut(&id),
            Participant::Enemy(index) => self.enemies.get_mut(&index),
        };

        match cooldowns {
            Some(cooldowns) => {
                cooldowns.setup_cooldown(&self.table, trigger_skill_id);
                log::debug!("{} used {}, cooldowns started", participant, trigger_skill_id);
            }
            None => {
                log::warn!(
                    "{} is not part of this battle, cooldowns for {} ignored",
                    participant,
                    trigger_skill_id
                );
            }
        }
    }

    pub fn setup_actor_cooldown(&mut self, actor_id: ActorId, trigger_skill_id: SkillId) {
        self.setup_cooldown(Participant::Actor(actor_id), trigger_skill_id);
    }

    pub fn setup_enemy_cooldown(&mut self, enemy_index: EnemyIndex, trigger_skill_id: SkillId) {
        self.setup_cooldown(Participant::Enemy(enemy_index), trigger_skill_id);
    }

    /// Whether the participant's skill is cooling down
    pub fn is_during_cooldown(&self, participant: Participant, skill_id: SkillId) -> bool {
        match participant {
            Participant::Actor(id) => self.is_actor_during_cooldown(id, skill_id),
            Participant::Enemy(index) => self.is_enemy_during_cooldown(index, skill_id),
        }
    }

    /// Always false outside of battle
    pub fn is_actor_during_cooldown(&self, actor_id: ActorId, skill_id: SkillId) -> bool {
        if !self.in_battle {
            return false;
        }
        self.actors
            .get(&actor_id)
            .map(|cooldowns| cooldowns.is_during_cooldown(skill_id))
            .unwrap_or(false)
    }

    pub fn is_enemy_during_cooldown(&self, enemy_index: EnemyIndex, skill_id: SkillId) -> bool {
        self.enemies
            .get(&enemy_index)
            .map(|cooldowns| cooldowns.is_during_cooldown(skill_id))
            .unwrap_or(false)
    }

    /// Remaining cooldown turns; 0 when none
    pub fn remaining_turns(&self, participant: Participant, skill_id: SkillId) -> u32 {
        self.cooldowns(participant)
            .map(|cooldowns| cooldowns.remaining_turns(skill_id))
            .unwrap_or(0)
    }

    pub fn actor_remaining_turns(&self, actor_id: ActorId, skill_id: SkillId) -> u32 {
        self.remaining_turns(Participant::Actor(actor_id), skill_id)
    }

    pub fn enemy_remaining_turns(&self, enemy_index: EnemyIndex, skill_id: SkillId) -> u32 {
        self.remaining_turns(Participant::Enemy(enemy_index), skill_id)
    }

    /// Cooldown state of a participant, if it was initialized
    pub fn cooldowns(&self, participant: Participant) -> Option<&ParticipantCooldowns> {
        match participant {
            Participant::Actor(id) => self.actors.get(&id),
            Participant::Enemy(index) => self.enemies.get(&index),
        }
    }

    /// Count every cooldown down by one turn. Call once per turn end.
    ///
    /// With `include_benched_actors` false, actors outside the active
    /// line-up keep their remaining turns.
    pub fn advance_all_turns<R: BattleRoster + ?Sized>(&mut self, include_benched_actors: bool, roster: &R) {
        for cooldowns in self.enemies.values_mut() {
            cooldowns.decrease_all_turns();
        }

        let mut frozen = 0;
        for (id, cooldowns) in self.actors.iter_mut() {
            if include_benched_actors || roster.is_battle_member(*id) {
                cooldowns.decrease_all_turns();
            } else {
                frozen += 1;
            }
        }

        log::debug!("Advanced cooldown turns ({} benched actor(s) frozen)", frozen);
    }

    /// Skill usability: the host's own check AND not cooling down
    pub fn meets_skill_conditions<B: CooldownAware + ?Sized>(
        &self,
        battler: &B,
        skill_id: SkillId,
        base_conditions_met: bool,
    ) -> bool {
        base_conditions_met && !self.is_during_cooldown(battler.participant(), skill_id)
    }

    /// Hook for the action pipeline after a battler successfully uses a skill
    pub fn on_skill_used<B: CooldownAware + ?Sized>(&mut self, battler: &B, skill_id: SkillId) {
        self.setup_cooldown(battler.participant(), skill_id);
    }
}

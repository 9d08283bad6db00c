//! CooldownEntry - Remaining turns of one skill's cooldown

use crate::config::CooldownSetupTable;
use crate::types::SkillId;
use serde::{Deserialize, Serialize};

/// A skill that cannot be used for a number of turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownEntry {
    skill_id: SkillId,
    remaining_turns: u32,
}

impl CooldownEntry {
    pub fn new(skill_id: SkillId, remaining_turns: u32) -> Self {
        CooldownEntry {
            skill_id,
            remaining_turns,
        }
    }

    /// Fresh cooldowns started by using `trigger_skill_id`.
    ///
    /// Each target gets one turn more than configured, because the turn the
    /// trigger skill was used in ends right away and counts down once.
    pub fn setup(table: &CooldownSetupTable, trigger_skill_id: SkillId) -> Vec<CooldownEntry> {
        table
            .targets_for(trigger_skill_id)
            .iter()
            .map(|target| {
                CooldownEntry::new(target.target_skill_id(), target.turn_count().saturating_add(1))
            })
            .collect()
    }

    pub fn skill_id(&self) -> SkillId {
        self.skill_id
    }

    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    /// Check if the cooldown has run out
    pub fn is_finished(&self) -> bool {
        self.remaining_turns == 0
    }

    /// Count down one turn, stopping at zero
    pub fn decrease_turn(&mut self) {
        self.remaining_turns = self.remaining_turns.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CooldownSetup, CooldownSetupEntry};

    fn table() -> CooldownSetupTable {
        CooldownSetupTable::new(vec![CooldownSetup::new(
            SkillId(10),
            vec![
                CooldownSetupEntry::new(SkillId(20), 2),
                CooldownSetupEntry::new(SkillId(21), 0),
            ],
        )])
    }

    #[test]
    fn test_setup_adds_one_turn() {
        let entries = CooldownEntry::setup(&table(), SkillId(10));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], CooldownEntry::new(SkillId(20), 3));
        // A zero-turn cooldown still blocks until the end of the current turn
        assert_eq!(entries[1], CooldownEntry::new(SkillId(21), 1));
    }

    #[test]
    fn test_setup_unknown_trigger() {
        assert!(CooldownEntry::setup(&table(), SkillId(999)).is_empty());
    }

    #[test]
    fn test_decrease_turn_floors_at_zero() {
        let mut entry = CooldownEntry::new(SkillId(20), 2);
        assert!(!entry.is_finished());

        entry.decrease_turn();
        assert_eq!(entry.remaining_turns(), 1);
        entry.decrease_turn();
        assert!(entry.is_finished());

        entry.decrease_turn();
        assert_eq!(entry.remaining_turns(), 0);
        assert!(entry.is_finished());
    }
}

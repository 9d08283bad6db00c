//! ParticipantCooldowns - Cooldowns owned by one battle participant

use super::CooldownEntry;
use crate::config::CooldownSetupTable;
use crate::types::SkillId;
use std::collections::HashMap;

/// Skill cooldowns of a single actor or enemy
#[derive(Debug, Clone, Default)]
pub struct ParticipantCooldowns {
    /// Skill id -> cooldown. Finished entries are kept until overwritten.
    entries: HashMap<SkillId, CooldownEntry>,
}

impl ParticipantCooldowns {
    pub fn new() -> Self {
        ParticipantCooldowns {
            entries: HashMap::new(),
        }
    }

    /// Start the cooldowns configured for `trigger_skill_id`.
    ///
    /// A target already cooling down is restarted, not extended.
    pub fn setup_cooldown(&mut self, table: &CooldownSetupTable, trigger_skill_id: SkillId) {
        for entry in CooldownEntry::setup(table, trigger_skill_id) {
            self.entries.insert(entry.skill_id(), entry);
        }
    }

    pub fn is_during_cooldown(&self, skill_id: SkillId) -> bool {
        self.entries
            .get(&skill_id)
            .map(|entry| !entry.is_finished())
            .unwrap_or(false)
    }

    pub fn remaining_turns(&self, skill_id: SkillId) -> u32 {
        self.entries
            .get(&skill_id)
            .map(CooldownEntry::remaining_turns)
            .unwrap_or(0)
    }

    /// Count every cooldown down by one turn
    pub fn decrease_all_turns(&mut self) {
        for entry in self.entries.values_mut() {
            entry.decrease_turn();
        }
    }

    /// Cooldowns that have not finished yet
    pub fn active_cooldowns(&self) -> impl Iterator<Item = &CooldownEntry> {
        self.entries.values().filter(|entry| !entry.is_finished())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CooldownSetup, CooldownSetupEntry};

    fn table() -> CooldownSetupTable {
        CooldownSetupTable::new(vec![
            CooldownSetup::new(
                SkillId(10),
                vec![
                    CooldownSetupEntry::new(SkillId(20), 2),
                    CooldownSetupEntry::new(SkillId(21), 4),
                ],
            ),
            CooldownSetup::new(SkillId(11), vec![CooldownSetupEntry::new(SkillId(20), 5)]),
        ])
    }

    #[test]
    fn test_setup_cooldown() {
        let mut cooldowns = ParticipantCooldowns::new();
        cooldowns.setup_cooldown(&table(), SkillId(10));

        assert!(cooldowns.is_during_cooldown(SkillId(20)));
        assert!(cooldowns.is_during_cooldown(SkillId(21)));
        assert!(!cooldowns.is_during_cooldown(SkillId(10)));
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 3);
        assert_eq!(cooldowns.remaining_turns(SkillId(21)), 5);
        assert_eq!(cooldowns.remaining_turns(SkillId(99)), 0);
    }

    #[test]
    fn test_unknown_trigger_is_noop() {
        let mut cooldowns = ParticipantCooldowns::new();
        cooldowns.setup_cooldown(&table(), SkillId(999));
        assert!(cooldowns.is_empty());
        assert!(!cooldowns.is_during_cooldown(SkillId(20)));
    }

    #[test]
    fn test_retrigger_resets_instead_of_adding() {
        let table = table();
        let mut cooldowns = ParticipantCooldowns::new();
        cooldowns.setup_cooldown(&table, SkillId(10));
        cooldowns.decrease_all_turns();
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 2);

        cooldowns.setup_cooldown(&table, SkillId(10));
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 3);

        // A different trigger for the same target overwrites as well, even if shorter
        cooldowns.setup_cooldown(&table, SkillId(11));
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 6);
        cooldowns.setup_cooldown(&table, SkillId(10));
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 3);
        assert_eq!(cooldowns.len(), 2);
    }

    #[test]
    fn test_decrease_all_turns() {
        let mut cooldowns = ParticipantCooldowns::new();
        cooldowns.setup_cooldown(&table(), SkillId(10));

        for _ in 0..3 {
            cooldowns.decrease_all_turns();
        }
        assert!(!cooldowns.is_during_cooldown(SkillId(20)));
        assert_eq!(cooldowns.remaining_turns(SkillId(21)), 2);
        assert_eq!(cooldowns.active_cooldowns().count(), 1);

        // Finished entries stay present but inactive
        assert_eq!(cooldowns.len(), 2);
    }

    #[test]
    fn test_decrease_without_active_entries() {
        let mut cooldowns = ParticipantCooldowns::new();
        cooldowns.decrease_all_turns();
        assert!(cooldowns.is_empty());

        // Only finished entries left: further turns change nothing
        cooldowns.setup_cooldown(&table(), SkillId(10));
        for _ in 0..5 {
            cooldowns.decrease_all_turns();
        }
        assert_eq!(cooldowns.active_cooldowns().count(), 0);
        let before = cooldowns.clone();

        cooldowns.decrease_all_turns();
        assert_eq!(cooldowns.entries, before.entries);
        assert_eq!(cooldowns.len(), 2);
        assert_eq!(cooldowns.remaining_turns(SkillId(20)), 0);
        assert_eq!(cooldowns.remaining_turns(SkillId(21)), 0);
    }
}

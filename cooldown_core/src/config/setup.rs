//! Trigger skill -> target skill cooldown table

use crate::types::SkillId;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Turn count used when a target record does not specify one
pub const DEFAULT_COOLDOWN_TURN_COUNT: u32 = 3;

fn default_turn_count() -> u32 {
    DEFAULT_COOLDOWN_TURN_COUNT
}

/// Read a `u32`, falling back to `default` for anything else
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D, field: &str, default: u32) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let parsed = value.as_u64().and_then(|n| u32::try_from(n).ok());

    Ok(parsed.unwrap_or_else(|| {
        log::warn!("Invalid value for '{}': {}, using {}", field, value, default);
        default
    }))
}

fn lenient_turn_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer, "cooldown_turn_count", DEFAULT_COOLDOWN_TURN_COUNT)
}

fn lenient_target_skill_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SkillId, D::Error> {
    lenient_u32(deserializer, "target_skill_id", 0).map(SkillId)
}

fn lenient_trigger_skill_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SkillId, D::Error> {
    lenient_u32(deserializer, "trigger_skill_id", 0).map(SkillId)
}

/// A skill put on cooldown by a trigger skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownSetupEntry {
    #[serde(default, deserialize_with = "lenient_target_skill_id")]
    target_skill_id: SkillId,
    /// Full turns the target stays unusable
    #[serde(
        rename = "cooldown_turn_count",
        default = "default_turn_count",
        deserialize_with = "lenient_turn_count"
    )]
    turn_count: u32,
}

impl CooldownSetupEntry {
    pub fn new(target_skill_id: SkillId, turn_count: u32) -> Self {
        CooldownSetupEntry {
            target_skill_id,
            turn_count,
        }
    }

    pub fn target_skill_id(&self) -> SkillId {
        self.target_skill_id
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }
}

/// Cooldowns started by one trigger skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownSetup {
    #[serde(default, deserialize_with = "lenient_trigger_skill_id")]
    trigger_skill_id: SkillId,
    #[serde(rename = "target_skills", default)]
    targets: Vec<CooldownSetupEntry>,
}

impl CooldownSetup {
    pub fn new(trigger_skill_id: SkillId, targets: Vec<CooldownSetupEntry>) -> Self {
        CooldownSetup {
            trigger_skill_id,
            targets,
        }
    }

    pub fn trigger_skill_id(&self) -> SkillId {
        self.trigger_skill_id
    }

    pub fn targets(&self) -> &[CooldownSetupEntry] {
        &self.targets
    }
}

/// Read-only lookup table of cooldown setups keyed by trigger skill
#[derive(Debug, Clone, Default)]
pub struct CooldownSetupTable {
    setups: Vec<CooldownSetup>,
    /// Trigger skill id -> position in `setups`
    by_trigger: HashMap<SkillId, usize>,
}

impl CooldownSetupTable {
    /// Build the table. When a trigger id repeats, the first record wins.
    pub fn new(setups: Vec<CooldownSetup>) -> Self {
        let mut table = CooldownSetupTable {
            setups: Vec::with_capacity(setups.len()),
            by_trigger: HashMap::new(),
        };

        for setup in setups {
            if table.by_trigger.contains_key(&setup.trigger_skill_id) {
                log::warn!(
                    "Duplicate cooldown setting for trigger {}, keeping the first one",
                    setup.trigger_skill_id
                );
                continue;
            }
            table.by_trigger.insert(setup.trigger_skill_id, table.setups.len());
            table.setups.push(setup);
        }

        table
    }

    /// Find the setup for a trigger skill
    pub fn lookup(&self, trigger_skill_id: SkillId) -> Option<&CooldownSetup> {
        self.by_trigger
            .get(&trigger_skill_id)
            .map(|&index| &self.setups[index])
    }

    /// Targets configured for a trigger skill; empty when there are none
    pub fn targets_for(&self, trigger_skill_id: SkillId) -> &[CooldownSetupEntry] {
        self.lookup(trigger_skill_id)
            .map(CooldownSetup::targets)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.setups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.setups.is_empty()
    }
}

impl FromIterator<CooldownSetup> for CooldownSetupTable {
    fn from_iter<I: IntoIterator<Item = CooldownSetup>>(iter: I) -> Self {
        CooldownSetupTable::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(trigger: u32, targets: &[(u32, u32)]) -> CooldownSetup {
        CooldownSetup::new(
            SkillId(trigger),
            targets
                .iter()
                .map(|&(skill, turns)| CooldownSetupEntry::new(SkillId(skill), turns))
                .collect(),
        )
    }

    #[test]
    fn test_lookup() {
        let table = CooldownSetupTable::new(vec![setup(10, &[(20, 2)]), setup(11, &[(21, 1), (22, 4)])]);

        assert_eq!(table.len(), 2);
        let found = table.lookup(SkillId(11)).unwrap();
        assert_eq!(found.trigger_skill_id(), SkillId(11));
        assert_eq!(found.targets()[1].target_skill_id(), SkillId(22));
        assert_eq!(found.targets()[1].turn_count(), 4);
    }

    #[test]
    fn test_unknown_trigger_has_no_targets() {
        let table = CooldownSetupTable::new(vec![setup(10, &[(20, 2)])]);
        assert!(table.lookup(SkillId(999)).is_none());
        assert!(table.targets_for(SkillId(999)).is_empty());
    }

    #[test]
    fn test_duplicate_trigger_keeps_first() {
        let table: CooldownSetupTable = vec![setup(10, &[(20, 2)]), setup(10, &[(30, 5)])]
            .into_iter()
            .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.targets_for(SkillId(10))[0].target_skill_id(), SkillId(20));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: CooldownSetup = toml::from_str("[[target_skills]]\n").unwrap();
        assert_eq!(parsed.trigger_skill_id(), SkillId(0));
        assert_eq!(parsed.targets()[0].target_skill_id(), SkillId(0));
        assert_eq!(parsed.targets()[0].turn_count(), DEFAULT_COOLDOWN_TURN_COUNT);
    }

    #[test]
    fn test_invalid_numbers_use_defaults() {
        let toml = r#"
trigger_skill_id = "ten"

[[target_skills]]
target_skill_id = -20
cooldown_turn_count = -1

[[target_skills]]
target_skill_id = 21
cooldown_turn_count = "abc"

[[target_skills]]
target_skill_id = 22.0
cooldown_turn_count = 2.5

[[target_skills]]
target_skill_id = 23
cooldown_turn_count = 4294967296
"#;
        let parsed: CooldownSetup = toml::from_str(toml).unwrap();
        assert_eq!(parsed.trigger_skill_id(), SkillId(0));

        let targets = parsed.targets();
        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0].target_skill_id(), SkillId(0));
        assert_eq!(targets[1].target_skill_id(), SkillId(21));
        assert_eq!(targets[2].target_skill_id(), SkillId(0));
        assert_eq!(targets[3].target_skill_id(), SkillId(23));
        for target in targets {
            assert_eq!(target.turn_count(), DEFAULT_COOLDOWN_TURN_COUNT);
        }
    }

    #[test]
    fn test_valid_numbers_are_kept() {
        let toml = r#"
trigger_skill_id = 7

[[target_skills]]
target_skill_id = 8
cooldown_turn_count = 0
"#;
        let parsed: CooldownSetup = toml::from_str(toml).unwrap();
        assert_eq!(parsed.trigger_skill_id(), SkillId(7));
        assert_eq!(parsed.targets()[0].target_skill_id(), SkillId(8));
        assert_eq!(parsed.targets()[0].turn_count(), 0);
    }
}

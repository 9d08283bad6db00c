//! Remaining cooldown turns in skill lists

use crate::cooldown::CooldownManager;
use crate::types::{ActorId, SkillId};
use serde::{Deserialize, Serialize};

const TURN_PLACEHOLDER: &str = "{turn}";

/// Text drawn in place of a skill's cost while it is cooling down
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownLabel {
    pub text: String,
    pub text_color: u8,
}

/// How remaining cooldown turns are shown in place of a skill's cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooldownDisplay {
    /// Show remaining turns instead of the skill cost while cooling down
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Label template; `{turn}` is replaced with the remaining turns
    #[serde(default = "default_format")]
    pub format: String,
    /// Text color index of the label
    #[serde(default = "default_text_color")]
    pub text_color: u8,
}

impl Default for CooldownDisplay {
    fn default() -> Self {
        CooldownDisplay {
            enabled: default_enabled(),
            format: default_format(),
            text_color: default_text_color(),
        }
    }
}

fn default_enabled() -> bool {
    true
}
fn default_format() -> String {
    "CT:{turn}".to_string()
}
fn default_text_color() -> u8 {
    2
}

impl CooldownDisplay {
    /// Fill the `{turn}` placeholders (ASCII case-insensitive)
    pub fn format_turn(&self, turns: u32) -> String {
        // ASCII lowercasing keeps byte offsets identical to `self.format`
        let lowered = self.format.to_ascii_lowercase();
        let turn = turns.to_string();

        let mut out = String::with_capacity(self.format.len() + turn.len());
        let mut last = 0;
        for (start, _) in lowered.match_indices(TURN_PLACEHOLDER) {
            out.push_str(&self.format[last..start]);
            out.push_str(&turn);
            last = start + TURN_PLACEHOLDER.len();
        }
        out.push_str(&self.format[last..]);
        out
    }

    /// Label to draw instead of the skill cost, if any.
    ///
    /// Returns `None` when display is disabled, outside of battle, or when
    /// the skill is not cooling down for the actor.
    pub fn cooldown_label(
        &self,
        manager: &CooldownManager,
        actor_id: ActorId,
        skill_id: SkillId,
    ) -> Option<CooldownLabel> {
        if !self.enabled || !manager.in_battle() || !manager.is_actor_during_cooldown(actor_id, skill_id) {
            return None;
        }
        Some(CooldownLabel {
            text: self.format_turn(manager.actor_remaining_turns(actor_id, skill_id)),
            text_color: self.text_color,
        })
    }
}

//! Example Battle - A scripted text battle demonstrating cooldown_core
//!
//! This example shows:
//! - Loading cooldown settings from TOML
//! - A battle session owning the CooldownManager
//! - Skill availability checks and cooldown labels in the skill list
//! - A formation change benching an actor mid-battle

use cooldown_core::config::{load_settings, CooldownSettings};
use cooldown_core::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use std::sync::Arc;

const TURNS: u32 = 6;

/// A skill known to the demo
struct Skill {
    id: SkillId,
    name: &'static str,
    mp_cost: u32,
}

fn skills() -> Vec<Skill> {
    vec![
        Skill { id: SkillId(1), name: "Attack", mp_cost: 0 },
        Skill { id: SkillId(10), name: "Power Strike", mp_cost: 5 },
        Skill { id: SkillId(31), name: "Heal", mp_cost: 8 },
        Skill { id: SkillId(51), name: "Fire", mp_cost: 6 },
        Skill { id: SkillId(52), name: "Fire II", mp_cost: 12 },
    ]
}

struct Actor {
    id: ActorId,
    name: &'static str,
    skills: Vec<SkillId>,
}

impl CooldownAware for Actor {
    fn participant(&self) -> Participant {
        Participant::Actor(self.id)
    }
}

struct Enemy {
    index: EnemyIndex,
    name: &'static str,
    skills: Vec<SkillId>,
}

impl CooldownAware for Enemy {
    fn participant(&self) -> Participant {
        Participant::Enemy(self.index)
    }
}

/// Party and troop for one battle
struct Roster {
    party: Vec<Actor>,
    /// Number of party members in the battle line-up
    front_row: usize,
    troop: Vec<Enemy>,
}

impl Roster {
    /// Actors in the battle line-up
    fn battle_members(&self) -> &[Actor] {
        &self.party[..self.front_row.min(self.party.len())]
    }
}

impl BattleRoster for Roster {
    fn actor_ids(&self) -> Vec<ActorId> {
        self.party.iter().map(|actor| actor.id).collect()
    }

    fn enemy_indices(&self) -> Vec<EnemyIndex> {
        self.troop.iter().map(|enemy| enemy.index).collect()
    }

    fn is_battle_member(&self, actor_id: ActorId) -> bool {
        self.battle_members().iter().any(|actor| actor.id == actor_id)
    }
}

/// One battle from start to end
struct BattleSession {
    roster: Roster,
    cooldowns: CooldownManager,
    settings: CooldownSettings,
    skills: Vec<Skill>,
    rng: ChaCha8Rng,
}

impl BattleSession {
    fn start(roster: Roster, settings: CooldownSettings, rng: ChaCha8Rng) -> Self {
        let mut cooldowns = CooldownManager::new(Arc::new(settings.setup_table()));
        cooldowns.initialize_from(&roster);

        BattleSession {
            roster,
            cooldowns,
            settings,
            skills: skills(),
            rng,
        }
    }

    fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|skill| skill.id == id)
    }

    fn skill_name(&self, id: SkillId) -> &'static str {
        self.skill(id).map(|skill| skill.name).unwrap_or("???")
    }

    /// Usable skills of a battler, cooldowns taken into account
    fn usable_skills<B: CooldownAware>(&self, battler: &B, known: &[SkillId]) -> Vec<SkillId> {
        known
            .iter()
            .copied()
            .filter(|&id| self.cooldowns.meets_skill_conditions(battler, id, self.skill(id).is_some()))
            .collect()
    }

    fn print_skill_list(&self, actor: &Actor) {
        println!("  {} skills:", actor.name);
        for &id in &actor.skills {
            let Some(skill) = self.skill(id) else {
                continue;
            };
            match self.settings.display.cooldown_label(&self.cooldowns, actor.id, id) {
                Some(label) => println!("    {:<14}{:>8} (color {})", skill.name, label.text, label.text_color),
                None => println!("    {:<14}{:>8}", skill.name, format!("{} MP", skill.mp_cost)),
            }
        }
    }

    fn play_turn(&mut self, turn: u32) {
        println!("\n--- Turn {} ---", turn);

        let mut used: Vec<(Participant, SkillId)> = Vec::new();

        for actor in self.roster.battle_members() {
            self.print_skill_list(actor);
            // Prefer the strongest skill available
            if let Some(&skill) = self.usable_skills(actor, &actor.skills).last() {
                println!("  > {} uses {}", actor.name, self.skill_name(skill));
                used.push((actor.participant(), skill));
            }
        }

        for enemy in &self.roster.troop {
            let usable = self.usable_skills(enemy, &enemy.skills);
            if let Some(&skill) = usable.choose(&mut self.rng) {
                println!("  > {} uses {}", enemy.name, self.skill_name(skill));
                used.push((enemy.participant(), skill));
            }
        }

        for (participant, skill) in used {
            self.cooldowns.setup_cooldown(participant, skill);
        }

        self.cooldowns
            .advance_all_turns(self.settings.decrease_benchwarmers_cooldown, &self.roster);
    }

    /// Move the last line-up member to the bench and bring in the first benched one
    fn rotate_formation(&mut self) {
        let front = self.roster.front_row;
        if front == 0 || front >= self.roster.party.len() {
            return;
        }
        self.roster.party.swap(front - 1, front);
        println!(
            "\n{} swaps in for {}",
            self.roster.party[front - 1].name, self.roster.party[front].name
        );
    }

    fn finish(mut self) {
        self.cooldowns.finish();
        println!("\nBattle over.");
    }
}

fn load_config() -> CooldownSettings {
    let config_paths = ["example_battle/config/cooldowns.toml", "config/cooldowns.toml"];

    config_paths
        .iter()
        .map(Path::new)
        .filter(|path| path.exists())
        .find_map(|path| match load_settings(path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::error!("Error loading config from '{}': {}", path.display(), e);
                None
            }
        })
        .unwrap_or_else(|| {
            log::warn!("No cooldown config found, using bundled settings");
            cooldown_core::default_settings()
        })
}

fn main() {
    env_logger::init();

    let settings = load_config();
    let roster = Roster {
        party: vec![
            Actor { id: ActorId(1), name: "Reid", skills: vec![SkillId(1), SkillId(10)] },
            Actor { id: ActorId(2), name: "Priscilla", skills: vec![SkillId(1), SkillId(31)] },
            Actor { id: ActorId(3), name: "Gale", skills: vec![SkillId(1), SkillId(51), SkillId(52)] },
            Actor { id: ActorId(4), name: "Michelle", skills: vec![SkillId(1), SkillId(51)] },
        ],
        front_row: 3,
        troop: vec![
            Enemy { index: EnemyIndex(0), name: "Slime A", skills: vec![SkillId(1), SkillId(51)] },
            Enemy { index: EnemyIndex(1), name: "Slime B", skills: vec![SkillId(1), SkillId(10)] },
        ],
    };

    let mut session = BattleSession::start(roster, settings, ChaCha8Rng::seed_from_u64(42));
    for turn in 1..=TURNS {
        if turn == TURNS / 2 {
            session.rotate_formation();
        }
        session.play_turn(turn);
    }
    session.finish();
}

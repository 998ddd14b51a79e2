// src/combat/src/lib.rs

pub mod action;
pub mod combatant;
pub mod encounter;
pub mod input;
pub mod monster;

#[cfg(test)]
mod tests;

pub use crate::action::Action;
pub use crate::combatant::{Combatant, PlayerCombatant};
pub use crate::encounter::{Encounter, EncounterOutcome, EncounterReport, EncounterState};
pub use crate::input::{ActionSource, Narrator, ScriptedInput};
pub use crate::monster::{Monster, MonsterKind};

/// Handles attack resolution between combatants
pub struct Combat;

impl Combat {
    /// Damage dealt by `attack` against `defense`, never negative
    pub fn damage(attack: u32, defense: u32) -> u32 {
        attack.saturating_sub(defense)
    }

    /// Resolve a single attack with combat logs
    ///
    /// The defender's current `defense()` is used, so a guarding hero
    /// absorbs the boosted value. Dead combatants neither attack nor
    /// take further damage.
    pub fn resolve_attack<A, D>(attacker: &A, defender: &mut D) -> CombatResult
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let mut result = CombatResult::new();
        if !attacker.is_alive() || !defender.is_alive() {
            return result;
        }

        let damage = Self::damage(attacker.attack_power(), defender.defense());
        result.log(format!("{} attacks {}.", attacker.name(), defender.name()));

        if damage > 0 {
            defender.take_damage(damage);
            result.log(format!(
                "{} takes {} damage ({} hp left).",
                defender.name(),
                damage,
                defender.hp()
            ));
        } else {
            result.log(format!("{} blocks the attack.", defender.name()));
        }

        tracing::debug!(
            attacker = attacker.name(),
            defender = defender.name(),
            damage,
            remaining = defender.hp(),
            "attack resolved"
        );

        result.damage = damage;
        if !defender.is_alive() {
            result.log(format!("{} defeated {}!", attacker.name(), defender.name()));
            result.defeated = true;
        }

        result
    }
}

/// Combat result with detailed logs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub logs: Vec<String>, // Narration lines for the console
    pub damage: u32,       // Damage actually applied
    pub defeated: bool,    // Whether target was defeated
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }
}

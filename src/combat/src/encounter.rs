//! Turn-based hero versus monster encounter.
//!
//! One turn: the hero acts, the monster retaliates if it survived, the
//! hero's guard drops. The encounter ends as soon as either side reaches
//! 0 hp. Invalid menu input is reported and re-prompted without consuming
//! a turn.

use error::GameError;

use crate::action::Action;
use crate::combatant::{Combatant, PlayerCombatant};
use crate::input::{ActionSource, Narrator};
use crate::Combat;

/// 战斗状态
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterState {
    Ongoing,
    HeroWon,
    HeroLost,
}

impl EncounterState {
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// The final result, once the fight is over
    pub fn outcome(&self) -> Option<EncounterOutcome> {
        match self {
            EncounterState::Ongoing => None,
            EncounterState::HeroWon => Some(EncounterOutcome::HeroWon),
            EncounterState::HeroLost => Some(EncounterOutcome::HeroLost),
        }
    }
}

/// 战斗结局
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    HeroWon,
    HeroLost,
}

/// Outcome of a resolved encounter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterReport {
    pub outcome: EncounterOutcome,
    pub turns: u32,
}

/// A single fight, borrowing both sides for its duration
pub struct Encounter<'a, H: PlayerCombatant, M: Combatant> {
    hero: &'a mut H,
    monster: &'a mut M,
    state: EncounterState,
    turns: u32,
}

impl<'a, H: PlayerCombatant, M: Combatant> Encounter<'a, H, M> {
    pub fn new(hero: &'a mut H, monster: &'a mut M) -> Self {
        let state = Self::evaluate(&*hero, &*monster);
        Self {
            hero,
            monster,
            state,
            turns: 0,
        }
    }

    fn evaluate(hero: &H, monster: &M) -> EncounterState {
        if !hero.is_alive() {
            EncounterState::HeroLost
        } else if !monster.is_alive() {
            EncounterState::HeroWon
        } else {
            EncounterState::Ongoing
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    /// Turns consumed so far
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Play one turn with an already validated action
    ///
    /// Does nothing once the encounter is over.
    pub fn step(&mut self, action: Action, narrator: &mut dyn Narrator) -> EncounterState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.turns += 1;
        tracing::debug!(turn = self.turns, ?action, "hero acts");

        match action {
            Action::Attack => {
                let result = Combat::resolve_attack(&*self.hero, &mut *self.monster);
                narrate_all(narrator, &result.logs);
            }
            Action::Defend => {
                self.hero.defend();
                narrator.narrate(&format!(
                    "{} raises a guard (defense {}).",
                    self.hero.name(),
                    self.hero.defense()
                ));
            }
            Action::Heal => {
                let healed = self.hero.heal();
                narrator.narrate(&format!(
                    "{} heals {} hp ({}/{}).",
                    self.hero.name(),
                    healed,
                    self.hero.hp(),
                    self.hero.max_hp()
                ));
            }
        }

        if self.monster.is_alive() {
            let result = Combat::resolve_attack(&*self.monster, &mut *self.hero);
            narrate_all(narrator, &result.logs);
        }
        self.hero.end_turn();

        self.state = Self::evaluate(&*self.hero, &*self.monster);
        if self.state.is_terminal() {
            tracing::info!(
                hero = self.hero.name(),
                monster = self.monster.name(),
                state = ?self.state,
                turns = self.turns,
                "encounter resolved"
            );
        }
        self.state
    }

    /// Prompt for actions until the encounter is resolved
    pub fn run(
        mut self,
        input: &mut dyn ActionSource,
        narrator: &mut dyn Narrator,
    ) -> Result<EncounterReport, GameError> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(EncounterReport {
                    outcome,
                    turns: self.turns,
                });
            }

            let Some(choice) = input.next_choice()? else {
                return Err(GameError::InputClosed);
            };
            match Action::parse(&choice) {
                Some(action) => {
                    self.step(action, narrator);
                }
                None => {
                    tracing::debug!(choice = %choice.trim(), "invalid menu choice");
                    narrator.narrate("Invalid option.");
                }
            }
        }
    }
}

fn narrate_all(narrator: &mut dyn Narrator, lines: &[String]) {
    for line in lines {
        narrator.narrate(line);
    }
}

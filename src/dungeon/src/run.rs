// src/dungeon/src/run.rs

use std::collections::VecDeque;

use combat::{ActionSource, Encounter, EncounterOutcome, Monster, MonsterKind, Narrator};
use error::GameError;
use hero::Hero;

use crate::treasure::Treasure;

/// 地牢结局
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Victory,
    Defeat,
}

/// Totals reported when a run ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub monsters_defeated: u32,
    pub treasures_found: u32,
}

/// 一次完整的地牢冒险：英雄依次挑战队列中的怪物
///
/// The run owns the hero, the monster queue and the treasure source. Each
/// encounter borrows the hero mutably, then hands it back for the treasure
/// step and the next fight.
pub struct DungeonRun<T: Treasure> {
    hero: Hero,
    monsters: VecDeque<Monster>,
    treasure: T,
}

impl<T: Treasure> DungeonRun<T> {
    /// 使用固定的怪物名单创建地牢
    pub fn new(hero: Hero, treasure: T) -> Self {
        Self::with_monsters(hero, MonsterKind::roster(), treasure)
    }

    /// Monsters are fought front to back
    pub fn with_monsters(
        hero: Hero,
        monsters: impl IntoIterator<Item = Monster>,
        treasure: T,
    ) -> Self {
        Self {
            hero,
            monsters: monsters.into_iter().collect(),
            treasure,
        }
    }

    pub fn hero(&self) -> &Hero {
        &self.hero
    }

    pub fn treasure(&self) -> &T {
        &self.treasure
    }

    /// Monsters still waiting in the queue
    pub fn remaining(&self) -> usize {
        self.monsters.len()
    }

    /// Play until the queue is empty or the hero dies
    ///
    /// If input fails mid-fight the current monster goes back to the front
    /// of the queue with its remaining hp, so a later call resumes there.
    pub fn play(
        &mut self,
        input: &mut dyn ActionSource,
        narrator: &mut dyn Narrator,
    ) -> Result<RunSummary, GameError> {
        let mut monsters_defeated = 0;
        let mut treasures_found = 0;

        narrator.narrate(&format!("{} enters the dungeon.", self.hero.name()));
        tracing::info!(hero = self.hero.name(), monsters = self.monsters.len(), "run started");

        while self.hero.is_alive() {
            let Some(mut monster) = self.monsters.pop_front() else {
                break;
            };
            narrator.narrate(&format!(
                "You have encountered {} (attack {}, defense {}, hp {}).",
                monster.name(),
                monster.attack(),
                monster.base_defense(),
                monster.hp()
            ));

            let result = Encounter::new(&mut self.hero, &mut monster).run(input, narrator);
            let report = match result {
                Ok(report) => report,
                Err(err) => {
                    self.monsters.push_front(monster);
                    return Err(err);
                }
            };
            match report.outcome {
                EncounterOutcome::HeroWon => {
                    monsters_defeated += 1;
                    narrator.narrate("Searching for treasure...");
                    let find = self.treasure.grant(&mut self.hero);
                    treasures_found += 1;
                    narrator.narrate(&find.to_string());
                }
                EncounterOutcome::HeroLost => break,
            }
        }

        let outcome = if self.hero.is_alive() {
            narrator.narrate(&format!(
                "{} has defeated every monster and conquered the dungeon!",
                self.hero.name()
            ));
            RunOutcome::Victory
        } else {
            narrator.narrate(&format!(
                "{} has been defeated in the dungeon.",
                self.hero.name()
            ));
            RunOutcome::Defeat
        };

        tracing::info!(?outcome, monsters_defeated, remaining = self.monsters.len(), "run finished");
        Ok(RunSummary {
            outcome,
            monsters_defeated,
            treasures_found,
        })
    }
}

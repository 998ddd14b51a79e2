//! Console dungeon crawler: a hero fights a fixed queue of monsters in
//! turn-based encounters, collecting treasure after every victory.

pub mod config;
pub mod console;

use dungeon::{DungeonRun, TreasureChest};
use hero::Hero;

use crate::config::GameConfig;

/// Build a run over the standard roster with a seeded treasure chest
pub fn new_run(config: &GameConfig, name: &str, seed: u64) -> DungeonRun<TreasureChest> {
    let hero = Hero::with_stats(name, config.hero);
    DungeonRun::new(hero, TreasureChest::new(seed))
}

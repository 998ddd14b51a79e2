//src/dungeon/src/lib.rs

pub mod run;
pub mod treasure;

pub use crate::run::{DungeonRun, RunOutcome, RunSummary};
pub use crate::treasure::{Treasure, TreasureChest, TreasureFind, TreasureKind};

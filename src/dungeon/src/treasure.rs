//! Post-victory treasure.
//!
//! The dungeon run only knows the [`Treasure`] trait; what a find does to
//! the hero is up to the implementation.

use std::fmt;

use hero::Hero;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use strum::{Display, EnumIter, IntoEnumIterator};

/// 宝藏生成器，每次击败怪物后调用一次
#[cfg_attr(test, mockall::automock)]
pub trait Treasure {
    /// Apply a beneficial effect to the hero
    fn grant(&mut self, hero: &mut Hero) -> TreasureFind;
}

/// 宝藏种类
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum TreasureKind {
    #[strum(to_string = "healing potion")]
    HealingPotion,
    #[strum(to_string = "sharpening stone")]
    SharpeningStone,
    #[strum(to_string = "shield plate")]
    ShieldPlate,
    #[strum(to_string = "vitality charm")]
    VitalityCharm,
}

impl TreasureKind {
    /// Inclusive range of the bonus granted by this kind
    fn bonus_range(&self) -> (u32, u32) {
        match self {
            TreasureKind::HealingPotion => (15, 30),
            TreasureKind::SharpeningStone => (2, 4),
            TreasureKind::ShieldPlate => (1, 3),
            TreasureKind::VitalityCharm => (5, 10),
        }
    }

    fn apply(&self, hero: &mut Hero, amount: u32) -> u32 {
        match self {
            TreasureKind::HealingPotion => hero.restore(amount),
            TreasureKind::SharpeningStone => {
                hero.boost_attack(amount);
                amount
            }
            TreasureKind::ShieldPlate => {
                hero.boost_defense(amount);
                amount
            }
            TreasureKind::VitalityCharm => {
                hero.boost_max_hp(amount);
                amount
            }
        }
    }
}

/// What a treasure step produced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreasureFind {
    pub kind: TreasureKind,
    pub amount: u32,
}

impl fmt::Display for TreasureFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let effect = match self.kind {
            TreasureKind::HealingPotion => "hp restored",
            TreasureKind::SharpeningStone => "attack",
            TreasureKind::ShieldPlate => "defense",
            TreasureKind::VitalityCharm => "max hp",
        };
        write!(f, "Found a {}: +{} {}.", self.kind, self.amount, effect)
    }
}

/// 使用确定性随机数的宝箱
#[derive(Debug, Clone)]
pub struct TreasureChest {
    rng: Pcg32,
}

impl TreasureChest {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Treasure for TreasureChest {
    fn grant(&mut self, hero: &mut Hero) -> TreasureFind {
        let kinds: Vec<TreasureKind> = TreasureKind::iter().collect();
        let kind = kinds[self.rng.random_range(0..kinds.len())];
        let (low, high) = kind.bonus_range();
        let rolled = self.rng.random_range(low..=high);
        let amount = kind.apply(hero, rolled);

        tracing::debug!(hero = hero.name(), ?kind, amount, "treasure granted");
        TreasureFind { kind, amount }
    }
}

// src/combat/src/monster.rs

use strum::{Display, EnumIter, IntoEnumIterator};

/// 地牢中的怪物种类，顺序即遭遇顺序（由弱到强）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MonsterKind {
    Impuestos,
    Hacienda,
    NicolBolas,
}

impl MonsterKind {
    /// (attack, defense, hp)
    pub fn stats(&self) -> (u32, u32, u32) {
        match self {
            MonsterKind::Impuestos => (8, 3, 30),
            MonsterKind::Hacienda => (12, 5, 50),
            MonsterKind::NicolBolas => (20, 10, 100),
        }
    }

    /// The fixed dungeon roster, weakest first
    pub fn roster() -> Vec<Monster> {
        MonsterKind::iter().map(Monster::spawn).collect()
    }
}

/// 怪物实体。除生命值外，所有属性在创建后不可变
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    name: String,
    attack: u32,
    defense: u32,
    hp: u32,
    max_hp: u32,
}

impl Monster {
    pub fn new(name: impl Into<String>, attack: u32, defense: u32, hp: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            hp,
            max_hp: hp,
        }
    }

    /// 按种类创建怪物
    pub fn spawn(kind: MonsterKind) -> Self {
        let (attack, defense, hp) = kind.stats();
        Self::new(kind.to_string(), attack, defense, hp)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn base_defense(&self) -> u32 {
        self.defense
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// 是否存活
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// 受到伤害，生命值最低为0
    pub(crate) fn apply_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

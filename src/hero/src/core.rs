// src/hero/src/core.rs

use crate::stats::HeroStats;

/// 英雄核心数据结构
///
/// The hero outlives every encounter: health, attack and defense carry
/// over between fights and are only raised by treasure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hero {
    pub(crate) name: String,
    pub(crate) hp: u32,
    pub(crate) max_hp: u32,
    pub(crate) base_attack: u32,
    pub(crate) base_defense: u32,
    pub(crate) heal_amount: u32,
    pub(crate) defend_bonus: u32,
    /// 本回合是否处于防御姿态
    pub(crate) defending: bool,
}

impl Hero {
    /// 使用默认属性创建英雄
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stats(name, HeroStats::default())
    }

    /// 使用指定属性创建英雄
    pub fn with_stats(name: impl Into<String>, stats: HeroStats) -> Self {
        Self {
            name: name.into(),
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            base_attack: stats.attack,
            base_defense: stats.defense,
            heal_amount: stats.heal_amount,
            defend_bonus: stats.defend_bonus,
            defending: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> u32 {
        self.base_defense
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// 恢复生命值（不超过上限），返回实际恢复量
    pub fn restore(&mut self, amount: u32) -> u32 {
        if !self.is_alive() {
            return 0;
        }
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// 提升攻击力
    pub fn boost_attack(&mut self, amount: u32) {
        if self.is_alive() {
            self.base_attack = self.base_attack.saturating_add(amount);
        }
    }

    /// 提升防御力
    pub fn boost_defense(&mut self, amount: u32) {
        if self.is_alive() {
            self.base_defense = self.base_defense.saturating_add(amount);
        }
    }

    /// 提升生命上限，并恢复同等生命值
    pub fn boost_max_hp(&mut self, amount: u32) {
        if self.is_alive() {
            self.max_hp = self.max_hp.saturating_add(amount);
            self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        }
    }
}

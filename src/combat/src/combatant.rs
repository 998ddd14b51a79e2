// src/combat/src/combatant.rs

use crate::monster::Monster;

/// 表示可以参加战斗的活体
pub trait Combatant {
    /// 获取名称
    fn name(&self) -> &str;

    /// 获取当前生命值
    fn hp(&self) -> u32;

    /// 获取最大生命值
    fn max_hp(&self) -> u32;

    /// 获取攻击力
    fn attack_power(&self) -> u32;

    /// 获取当前防御力（包含防御姿态加成）
    fn defense(&self) -> u32;

    /// 是否存活
    fn is_alive(&self) -> bool {
        self.hp() > 0
    }

    /// 造成伤害，返回是否仍然存活
    fn take_damage(&mut self, amount: u32) -> bool;
}

/// 由玩家操控的战斗者：除攻击外还可以防御和治疗
pub trait PlayerCombatant: Combatant {
    /// 进入防御姿态，仅对下一次受到的攻击生效
    fn defend(&mut self);

    /// 是否处于防御姿态
    fn is_defending(&self) -> bool;

    /// 治疗，返回实际恢复的生命值
    fn heal(&mut self) -> u32;

    /// 回合结束，清除防御姿态
    fn end_turn(&mut self);
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        self.name()
    }

    fn hp(&self) -> u32 {
        self.hp()
    }

    fn max_hp(&self) -> u32 {
        self.max_hp()
    }

    fn attack_power(&self) -> u32 {
        self.attack()
    }

    fn defense(&self) -> u32 {
        self.base_defense()
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.apply_damage(amount);
        self.is_alive()
    }
}

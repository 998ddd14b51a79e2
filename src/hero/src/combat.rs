// src/hero/src/combat.rs
use super::core::Hero;

use combat::{Combatant, PlayerCombatant};

/// 战斗系统实现
impl Combatant for Hero {
    fn name(&self) -> &str {
        &self.name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn attack_power(&self) -> u32 {
        self.base_attack
    }

    /// 防御姿态下加上额外防御
    fn defense(&self) -> u32 {
        if self.defending {
            self.base_defense.saturating_add(self.defend_bonus)
        } else {
            self.base_defense
        }
    }

    fn take_damage(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        if self.hp == 0 {
            tracing::info!(hero = %self.name, "hero has fallen");
        }
        self.is_alive()
    }
}

impl PlayerCombatant for Hero {
    fn defend(&mut self) {
        if self.is_alive() {
            self.defending = true;
            tracing::debug!(hero = %self.name, defense = self.defense(), "hero defends");
        }
    }

    fn is_defending(&self) -> bool {
        self.defending
    }

    /// 治疗（不超过最大HP）
    fn heal(&mut self) -> u32 {
        let healed = self.restore(self.heal_amount);
        tracing::debug!(hero = %self.name, healed, hp = self.hp, "hero heals");
        healed
    }

    fn end_turn(&mut self) {
        self.defending = false;
    }
}

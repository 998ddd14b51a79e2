// src/hero/src/stats.rs

use error::GameError;
use serde::{Deserialize, Serialize};

/// 英雄的基础属性与规则常量，可由配置文件覆盖
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroStats {
    /// 初始生命值，同时也是生命上限
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    /// 每次治疗恢复的生命值
    pub heal_amount: u32,
    /// 防御姿态下额外的防御力
    pub defend_bonus: u32,
}

impl Default for HeroStats {
    fn default() -> Self {
        Self {
            max_hp: 100,
            attack: 15,
            defense: 5,
            heal_amount: 20,
            defend_bonus: 5,
        }
    }
}

impl HeroStats {
    /// 检查属性是否可以开始游戏
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_hp == 0 {
            return Err(GameError::ValidationError(
                "hero max_hp must be greater than 0".into(),
            ));
        }
        if self.heal_amount == 0 {
            return Err(GameError::ValidationError(
                "hero heal_amount must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

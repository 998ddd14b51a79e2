// src/combat/src/action.rs

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// 战斗菜单中的玩家行动
///
/// Menu keys `1`/`2`/`3` are the input contract; the English words are
/// accepted as aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Action {
    #[strum(to_string = "Attack", serialize = "1")]
    Attack,
    #[strum(to_string = "Defend", serialize = "2")]
    Defend,
    #[strum(to_string = "Heal", serialize = "3")]
    Heal,
}

impl Action {
    /// Menu key for this action
    pub fn key(&self) -> u8 {
        match self {
            Action::Attack => 1,
            Action::Defend => 2,
            Action::Heal => 3,
        }
    }

    /// Menu lines, in key order
    pub fn menu() -> Vec<String> {
        Action::iter()
            .map(|action| format!("{}. {}", action.key(), action))
            .collect()
    }

    /// Parse a raw input line, ignoring surrounding whitespace
    pub fn parse(input: &str) -> Option<Action> {
        input.trim().parse().ok()
    }
}

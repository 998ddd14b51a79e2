//! 游戏错误处理模块
//!
//! 处理地牢运行过程中可能出现的错误，包括输入、配置、IO等错误。

use thiserror::Error;

/// 游戏运行过程中可能出现的错误类型
#[derive(Debug, Error)]
pub enum GameError {
    /// IO操作错误
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 输入流已关闭，无法继续读取玩家指令
    #[error("Input closed before the encounter was resolved")]
    InputClosed,

    /// 数值校验失败
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 配置文件无效
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::ConfigError(err.to_string())
    }
}

/// 处理游戏错误并转换为用户友好的消息
pub fn handle_error(error: &GameError) -> String {
    match error {
        GameError::InputClosed => "No more input: the hero leaves the dungeon.".to_string(),
        GameError::ValidationError(msg) => format!("Please enter a valid value ({msg})."),
        GameError::ConfigError(msg) => format!("The config file could not be read: {msg}"),
        GameError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => format!("File not found: {e}"),
            std::io::ErrorKind::PermissionDenied => format!("Permission denied: {e}"),
            _ => format!("IO error: {e}"),
        },
    }
}

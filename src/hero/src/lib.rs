// src/hero/src/lib.rs

// 核心模块
mod combat;
mod core;
mod stats;

// 重新导出主要类型
pub use self::{core::Hero, stats::HeroStats};

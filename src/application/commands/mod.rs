//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：小说拆分

mod optimize_commands;

pub mod handlers;

pub use optimize_commands::*;

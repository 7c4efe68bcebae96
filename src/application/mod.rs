//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（源文件读取、拆分结果存储）
//! - commands: 拆分命令及处理器
//! - queries: 按章读取的查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{OptimizeBatchHandler, OptimizeNovelHandler, OptimizeOutcome},
    OptimizeBatch, OptimizeNovel,
};

pub use error::ApplicationError;

pub use ports::{NovelOutputWriter, NovelSourcePort, OptimizedStorePort, SourceError, StorageError};

pub use queries::{
    handlers::{GetChapterHandler, GetNovelIndexHandler},
    GetChapter, GetNovelIndex,
};

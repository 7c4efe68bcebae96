//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：按章读取拆分后的小说

mod novel_queries;

pub mod handlers;

pub use novel_queries::*;

//! Domain Layer - 领域层
//!
//! Novel Context: 小说拆分相关的记录与规则

pub mod novel;

//! Application Ports - 端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod novel_source;
mod optimized_store;

pub use novel_source::{NovelSourcePort, SourceError};
pub use optimized_store::{NovelOutputWriter, OptimizedStorePort, StorageError};

//! Rovel Optimizer - 小说拆分工具
//!
//! 把整本小说的 JSON 文件拆成按章读取的目录结构：
//! - `<root>/<novel_id>/index.json`: 章节目录（不含正文）
//! - `<root>/<novel_id>/chapters/<i>.json`: 单章正文
//!
//! 领域层 (domain/): 源章节、目录索引、标题解析
//!
//! 应用层 (application/):
//! - Ports: NovelSourcePort, OptimizedStorePort
//! - Commands: 拆分命令处理器
//! - Queries: 按章读取
//!
//! 基础设施层 (infrastructure/): 文件系统适配器

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};

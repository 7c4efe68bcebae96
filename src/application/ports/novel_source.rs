//! Novel Source Port - 入站数据端口
//!
//! 读取整本小说的源 JSON 文件

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::novel::SourceChapter;

/// 源文件读取错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Parse error: {path}: {message}")]
    ParseError { path: String, message: String },
}

/// Novel Source Port
///
/// 源文件不存在时返回 `Ok(None)`，由调用方决定是否跳过；
/// 其余读取或解析失败一律返回错误
#[async_trait]
pub trait NovelSourcePort: Send + Sync {
    /// 源文件的完整路径
    fn source_path(&self, filename: &str) -> PathBuf;

    /// 读取并解析源文件中的章节列表
    async fn load_chapters(&self, filename: &str)
        -> Result<Option<Vec<SourceChapter>>, SourceError>;
}

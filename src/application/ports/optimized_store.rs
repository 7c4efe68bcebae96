//! Optimized Store Port - 出站端口
//!
//! 拆分后的小说存储布局：
//! - `<root>/<novel_id>/index.json`
//! - `<root>/<novel_id>/chapters/<index>.json`

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::novel::{ChapterContent, NovelId, NovelIndex};

/// 存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 单本小说的输出目录句柄
///
/// 由 [`OptimizedStorePort::reset_output_dir`] 返回。
/// 未调用 `commit` 就被丢弃时，实现必须删除已写入的部分输出
#[async_trait]
pub trait NovelOutputWriter: Send {
    /// 写入 `chapters/{index}.json`
    async fn write_chapter(&mut self, chapter: &ChapterContent) -> Result<(), StorageError>;

    /// 写入 `index.json`
    async fn write_index(&mut self, index: &NovelIndex) -> Result<(), StorageError>;

    /// 确认输出完整，返回小说输出目录
    fn commit(self: Box<Self>) -> PathBuf;
}

/// Optimized Store Port
#[async_trait]
pub trait OptimizedStorePort: Send + Sync {
    /// 小说输出目录
    fn novel_dir(&self, novel_id: &NovelId) -> PathBuf;

    /// 确保输出根目录存在，不清理已有的其他小说
    async fn prepare_root(&self) -> Result<(), StorageError>;

    /// 删除并重建小说输出目录（含 `chapters/` 子目录）
    ///
    /// 幂等：目录不存在时直接创建
    async fn reset_output_dir(
        &self,
        novel_id: &NovelId,
    ) -> Result<Box<dyn NovelOutputWriter>, StorageError>;

    /// 读取目录索引
    async fn load_index(&self, novel_id: &NovelId) -> Result<NovelIndex, StorageError>;

    /// 读取单章正文
    async fn load_chapter(
        &self,
        novel_id: &NovelId,
        index: usize,
    ) -> Result<ChapterContent, StorageError>;
}

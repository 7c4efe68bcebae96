//! File Storage - 拆分结果的文件系统存储实现
//!
//! 实现 OptimizedStorePort trait

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{NovelOutputWriter, OptimizedStorePort, StorageError};
use crate::domain::novel::{ChapterContent, NovelId, NovelIndex};

/// 目录索引文件名
pub const INDEX_FILE: &str = "index.json";

/// 章节子目录名
pub const CHAPTERS_DIR: &str = "chapters";

/// 文件系统存储
pub struct FileOptimizedStore {
    /// 输出根目录
    root_dir: PathBuf,
}

impl FileOptimizedStore {
    pub fn new(root_dir: impl AsRef<Path>) -> Self {
        Self {
            root_dir: root_dir.as_ref().to_path_buf(),
        }
    }

    fn index_path(&self, novel_id: &NovelId) -> PathBuf {
        self.novel_dir(novel_id).join(INDEX_FILE)
    }

    fn chapter_path(&self, novel_id: &NovelId, index: usize) -> PathBuf {
        chapter_path(&self.novel_dir(novel_id), index)
    }
}

fn chapter_path(novel_dir: &Path, index: usize) -> PathBuf {
    novel_dir.join(CHAPTERS_DIR).join(format!("{}.json", index))
}

/// 紧凑 JSON，非 ASCII 字符原样写出
async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let bytes =
        serde_json::to_vec(value).map_err(|e| StorageError::SerializationError(e.to_string()))?;

    fs::write(path, bytes)
        .await
        .map_err(|e| StorageError::IoError(format!("{}: {}", path.display(), e)))
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StorageError::FileNotFound(
                path.to_string_lossy().to_string(),
            ));
        }
        Err(e) => return Err(StorageError::IoError(format!("{}: {}", path.display(), e))),
    };

    serde_json::from_slice(&bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
}

#[async_trait]
impl OptimizedStorePort for FileOptimizedStore {
    fn novel_dir(&self, novel_id: &NovelId) -> PathBuf {
        self.root_dir.join(novel_id.as_str())
    }

    async fn prepare_root(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root_dir)
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))
    }

    async fn reset_output_dir(
        &self,
        novel_id: &NovelId,
    ) -> Result<Box<dyn NovelOutputWriter>, StorageError> {
        let novel_dir = self.novel_dir(novel_id);

        if novel_dir.exists() {
            fs::remove_dir_all(&novel_dir)
                .await
                .map_err(|e| StorageError::IoError(e.to_string()))?;

            tracing::debug!(novel_id = %novel_id, "Removed previous output");
        }

        fs::create_dir_all(novel_dir.join(CHAPTERS_DIR))
            .await
            .map_err(|e| StorageError::IoError(e.to_string()))?;

        Ok(Box::new(NovelOutputDir::new(novel_dir)))
    }

    async fn load_index(&self, novel_id: &NovelId) -> Result<NovelIndex, StorageError> {
        read_json(&self.index_path(novel_id)).await
    }

    async fn load_chapter(
        &self,
        novel_id: &NovelId,
        index: usize,
    ) -> Result<ChapterContent, StorageError> {
        read_json(&self.chapter_path(novel_id, index)).await
    }
}

/// 正在写入的小说输出目录
///
/// 未 commit 就被丢弃时删除整个目录，避免留下不完整的输出
pub struct NovelOutputDir {
    dir: PathBuf,
    written_chapters: usize,
    committed: bool,
}

impl NovelOutputDir {
    fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            written_chapters: 0,
            committed: false,
        }
    }
}

#[async_trait]
impl NovelOutputWriter for NovelOutputDir {
    async fn write_chapter(&mut self, chapter: &ChapterContent) -> Result<(), StorageError> {
        write_json(&chapter_path(&self.dir, chapter.index), chapter).await?;
        self.written_chapters += 1;
        Ok(())
    }

    async fn write_index(&mut self, index: &NovelIndex) -> Result<(), StorageError> {
        write_json(&self.dir.join(INDEX_FILE), index).await?;

        tracing::debug!(
            dir = %self.dir.display(),
            chapters = self.written_chapters,
            "Wrote novel index"
        );

        Ok(())
    }

    fn commit(mut self: Box<Self>) -> PathBuf {
        self.committed = true;
        self.dir.clone()
    }
}

impl Drop for NovelOutputDir {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        // Drop 不能 await，这里有意使用阻塞删除；只在出错路径上发生
        match std::fs::remove_dir_all(&self.dir) {
            Ok(()) => tracing::warn!(
                dir = %self.dir.display(),
                "Discarded incomplete novel output"
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::error!(
                dir = %self.dir.display(),
                error = %e,
                "Failed to remove incomplete novel output"
            ),
        }
    }
}

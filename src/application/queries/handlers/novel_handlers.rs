//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{OptimizedStorePort, StorageError};
use crate::application::queries::{GetChapter, GetNovelIndex};
use crate::domain::novel::{ChapterContent, NovelId, NovelIndex};

/// GetNovelIndex Handler
pub struct GetNovelIndexHandler {
    store: Arc<dyn OptimizedStorePort>,
}

impl GetNovelIndexHandler {
    pub fn new(store: Arc<dyn OptimizedStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetNovelIndex) -> Result<NovelIndex, ApplicationError> {
        let novel_id = NovelId::new(query.novel_id)?;

        match self.store.load_index(&novel_id).await {
            Ok(index) => Ok(index),
            Err(StorageError::FileNotFound(_)) => {
                Err(ApplicationError::not_found("Novel", novel_id.as_str()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// GetChapter Handler
///
/// 只读取单个章节文件，不加载整本小说
pub struct GetChapterHandler {
    store: Arc<dyn OptimizedStorePort>,
}

impl GetChapterHandler {
    pub fn new(store: Arc<dyn OptimizedStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetChapter) -> Result<ChapterContent, ApplicationError> {
        let novel_id = NovelId::new(query.novel_id)?;

        match self.store.load_chapter(&novel_id, query.index).await {
            Ok(chapter) => Ok(chapter),
            Err(StorageError::FileNotFound(_)) => Err(ApplicationError::not_found(
                "Chapter",
                format!("{}/{}", novel_id, query.index),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

//! Optimize Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::{OptimizeBatch, OptimizeNovel};
use crate::application::error::ApplicationError;
use crate::application::ports::{NovelSourcePort, OptimizedStorePort};
use crate::domain::novel::{NovelId, SourceNovel};

/// 单本小说的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeOutcome {
    /// 源文件不存在，未产生任何输出
    Skipped { path: PathBuf },
    /// 拆分完成
    Optimized {
        novel_id: NovelId,
        total_chapters: usize,
        output_dir: PathBuf,
    },
}

// ============================================================================
// OptimizeNovel
// ============================================================================

/// OptimizeNovel Handler
///
/// 读取源文件，重建输出目录，逐章写入正文，最后写入目录索引
pub struct OptimizeNovelHandler {
    source: Arc<dyn NovelSourcePort>,
    store: Arc<dyn OptimizedStorePort>,
}

impl OptimizeNovelHandler {
    pub fn new(source: Arc<dyn NovelSourcePort>, store: Arc<dyn OptimizedStorePort>) -> Self {
        Self { source, store }
    }

    pub async fn handle(&self, command: OptimizeNovel) -> Result<OptimizeOutcome, ApplicationError> {
        let filename = command.filename;

        let Some(chapters) = self.source.load_chapters(&filename).await? else {
            let path = self.source.source_path(&filename);
            tracing::warn!(path = %path.display(), "File not found, skipping");
            return Ok(OptimizeOutcome::Skipped { path });
        };

        tracing::info!(filename = %filename, "Processing novel");

        let novel = SourceNovel::new(NovelId::from_filename(&filename)?, chapters);

        // 未 commit 前出错时，输出目录会随 writer 一起被清理
        let mut output = self.store.reset_output_dir(novel.id()).await?;

        for chapter in novel.contents() {
            output.write_chapter(&chapter).await?;
        }

        let index = novel.index();
        output.write_index(&index).await?;
        let output_dir = output.commit();

        tracing::info!(
            novel_id = %novel.id(),
            total_chapters = index.total_chapters,
            "Finished novel"
        );

        Ok(OptimizeOutcome::Optimized {
            novel_id: index.id,
            total_chapters: index.total_chapters,
            output_dir,
        })
    }
}

// ============================================================================
// OptimizeBatch
// ============================================================================

/// OptimizeBatch Handler
///
/// 逐本顺序处理；缺失的源文件只会被跳过，其他错误立即中止整批
pub struct OptimizeBatchHandler {
    novel_handler: OptimizeNovelHandler,
    store: Arc<dyn OptimizedStorePort>,
}

impl OptimizeBatchHandler {
    pub fn new(source: Arc<dyn NovelSourcePort>, store: Arc<dyn OptimizedStorePort>) -> Self {
        Self {
            novel_handler: OptimizeNovelHandler::new(source, store.clone()),
            store,
        }
    }

    pub async fn handle(
        &self,
        command: OptimizeBatch,
    ) -> Result<Vec<OptimizeOutcome>, ApplicationError> {
        self.store.prepare_root().await?;

        let mut outcomes = Vec::with_capacity(command.filenames.len());
        for filename in command.filenames {
            let outcome = self.novel_handler.handle(OptimizeNovel { filename }).await?;
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}

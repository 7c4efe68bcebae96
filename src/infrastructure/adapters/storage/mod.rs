//! Storage Adapter - 源文件读取与拆分结果存储

mod file_storage;
mod json_source;

pub use file_storage::{FileOptimizedStore, NovelOutputDir, CHAPTERS_DIR, INDEX_FILE};
pub use json_source::JsonNovelSource;

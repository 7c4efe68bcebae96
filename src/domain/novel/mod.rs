//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 源章节记录与输出记录（目录条目、章节正文、目录索引）
//! - 小说 ID 推导
//! - 章节标题解析

mod aggregate;
mod entities;
mod errors;
mod title;
mod value_objects;

pub use aggregate::{NovelIndex, SourceNovel};
pub use entities::{ChapterContent, ChapterSummary, SourceChapter};
pub use errors::NovelError;
pub use title::{resolve_summary_title, resolve_title};
pub use value_objects::{NovelId, SOURCE_EXTENSION};

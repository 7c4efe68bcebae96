//! Novel Context - Aggregate Root

use serde::{Deserialize, Serialize};

use super::{ChapterContent, ChapterSummary, NovelId, SourceChapter};

/// 源小说聚合根
///
/// 不变量:
/// - 章节顺序即源文件中的顺序，不做排序
/// - 章节索引从 0 开始连续编号
#[derive(Debug, Clone)]
pub struct SourceNovel {
    id: NovelId,
    chapters: Vec<SourceChapter>,
}

impl SourceNovel {
    pub fn new(id: NovelId, chapters: Vec<SourceChapter>) -> Self {
        Self { id, chapters }
    }

    pub fn id(&self) -> &NovelId {
        &self.id
    }

    /// 按源顺序生成所有章节正文记录
    pub fn contents(&self) -> impl Iterator<Item = ChapterContent> + '_ {
        self.chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| chapter.content(index))
    }

    /// 生成目录索引
    pub fn index(&self) -> NovelIndex {
        let chapters = self
            .chapters
            .iter()
            .enumerate()
            .map(|(index, chapter)| chapter.summary(index))
            .collect();

        NovelIndex {
            id: self.id.clone(),
            total_chapters: self.chapters.len(),
            chapters,
        }
    }
}

/// 小说目录索引，对应 `index.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovelIndex {
    pub id: NovelId,
    pub total_chapters: usize,
    pub chapters: Vec<ChapterSummary>,
}

impl NovelIndex {
    pub fn contains(&self, index: usize) -> bool {
        index < self.total_chapters
    }

    pub fn get_chapter(&self, index: usize) -> Option<&ChapterSummary> {
        self.chapters.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn chapter(title: Option<&str>, original: Option<&str>, content: &str) -> SourceChapter {
        SourceChapter {
            title: title.map(Value::from),
            original_title: original.map(Value::from),
            id: None,
            content: Some(Value::from(content)),
        }
    }

    #[test]
    fn test_index_mirrors_source_order() {
        let novel = SourceNovel::new(
            NovelId::new("demo").unwrap(),
            vec![
                chapter(Some("Intro"), None, "Hello"),
                chapter(None, Some("Two"), "World"),
                chapter(None, None, "Bare"),
            ],
        );

        let index = novel.index();
        assert_eq!(index.total_chapters, 3);
        let titles: Vec<_> = index.chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Two", "Chapter 3"]);
        assert!(index.contains(2));
        assert!(!index.contains(3));
    }

    #[test]
    fn test_contents_are_indexed_in_order() {
        let novel = SourceNovel::new(
            NovelId::new("demo").unwrap(),
            vec![chapter(None, None, "a"), chapter(None, None, "b")],
        );

        let contents: Vec<_> = novel.contents().collect();
        assert_eq!(contents[0].index, 0);
        assert_eq!(contents[1].content, "b");
    }

    #[test]
    fn test_empty_novel() {
        let novel = SourceNovel::new(NovelId::new("empty").unwrap(), Vec::new());
        let index = novel.index();
        assert_eq!(index.total_chapters, 0);
        assert!(index.chapters.is_empty());
        assert_eq!(novel.contents().count(), 0);
    }
}

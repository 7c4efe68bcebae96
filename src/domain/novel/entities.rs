//! Novel Context - Entities

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::title::{resolve_summary_title, resolve_title};

/// 源文件中的章节记录
///
/// 所有字段都是可选的，未知字段会被忽略。
/// 字段值不做类型校验：`title`、`original_title`、`content` 不是字符串时按缺失处理
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SourceChapter {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub original_title: Option<Value>,
    /// 章节标识，保留源数据中的原始 JSON 值
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub content: Option<Value>,
}

#[inline]
fn text(value: &Option<Value>) -> Option<&str> {
    value.as_ref().and_then(Value::as_str)
}

impl SourceChapter {
    pub fn title(&self) -> Option<&str> {
        text(&self.title)
    }

    pub fn original_title(&self) -> Option<&str> {
        text(&self.original_title)
    }

    /// 正文，缺失、`null` 或非字符串时为 `None`
    pub fn text(&self) -> Option<&str> {
        text(&self.content)
    }

    /// 生成目录条目
    pub fn summary(&self, index: usize) -> ChapterSummary {
        ChapterSummary {
            index,
            title: resolve_summary_title(self.title(), self.original_title(), index),
            id: self.id.clone(),
        }
    }

    /// 生成章节正文记录
    pub fn content(&self, index: usize) -> ChapterContent {
        ChapterContent {
            index,
            title: resolve_title(self.title(), self.original_title()),
            content: self.text().unwrap_or_default().to_string(),
        }
    }
}

/// 目录条目（不含正文）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub index: usize,
    pub title: String,
    /// 缺失时序列化为 `null`
    pub id: Option<Value>,
}

/// 单章正文，对应 `chapters/{index}.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterContent {
    pub index: usize,
    pub title: Option<String>,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let chapter: SourceChapter = serde_json::from_value(json!({
            "title": "Intro",
            "url": "https://example.com/1",
            "content": "Hello"
        }))
        .unwrap();

        assert_eq!(chapter.title(), Some("Intro"));
        assert_eq!(chapter.text(), Some("Hello"));
        assert!(chapter.id.is_none());
    }

    #[test]
    fn test_summary_keeps_raw_id() {
        let chapter: SourceChapter =
            serde_json::from_value(json!({ "id": 1024, "original_title": "Two" })).unwrap();

        let summary = chapter.summary(1);
        assert_eq!(summary.title, "Two");
        assert_eq!(summary.id, Some(json!(1024)));
    }

    #[test]
    fn test_non_string_fields_are_treated_as_absent() {
        let chapter: SourceChapter = serde_json::from_value(json!({
            "title": 12,
            "original_title": ["Two"],
            "content": {"body": "x"}
        }))
        .unwrap();

        assert_eq!(chapter.summary(0).title, "Chapter 1");
        let content = chapter.content(0);
        assert_eq!(content.title, None);
        assert_eq!(content.content, "");
    }

    #[test]
    fn test_non_string_title_falls_back_to_original_title() {
        let chapter: SourceChapter =
            serde_json::from_value(json!({ "title": false, "original_title": "Two" })).unwrap();

        assert_eq!(chapter.summary(3).title, "Two");
    }

    #[test]
    fn test_null_content_is_written_as_empty() {
        let chapter: SourceChapter =
            serde_json::from_value(json!({ "title": "A", "content": null })).unwrap();

        assert_eq!(chapter.content(0).content, "");
    }

    #[test]
    fn test_content_defaults() {
        let content = SourceChapter::default().content(2);
        assert_eq!(content.index, 2);
        assert_eq!(content.title, None);
        assert_eq!(content.content, "");
    }

    #[test]
    fn test_output_field_order_and_nulls() {
        let summary = SourceChapter::default().summary(0);
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"index":0,"title":"Chapter 1","id":null}"#
        );

        let content = SourceChapter::default().content(0);
        assert_eq!(
            serde_json::to_string(&content).unwrap(),
            r#"{"index":0,"title":null,"content":""}"#
        );
    }
}

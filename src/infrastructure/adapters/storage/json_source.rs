//! JSON Source - 从数据目录读取整本小说
//!
//! 实现 NovelSourcePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{NovelSourcePort, SourceError};
use crate::domain::novel::SourceChapter;

/// 数据目录下的 JSON 源文件
pub struct JsonNovelSource {
    data_dir: PathBuf,
}

impl JsonNovelSource {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl NovelSourcePort for JsonNovelSource {
    fn source_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    async fn load_chapters(
        &self,
        filename: &str,
    ) -> Result<Option<Vec<SourceChapter>>, SourceError> {
        let path = self.source_path(filename);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).await.map_err(|e| SourceError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let chapters: Vec<SourceChapter> =
            serde_json::from_slice(&bytes).map_err(|e| SourceError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            size = bytes.len(),
            chapters = chapters.len(),
            "Loaded novel source"
        );

        Ok(Some(chapters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let temp_dir = tempdir().unwrap();
        let source = JsonNovelSource::new(temp_dir.path());

        assert!(source.load_chapters("missing.json").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_preserves_order() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join("demo.json"),
            r#"[{"title": "b"}, {"title": "a"}, {}]"#,
        )
        .unwrap();
        let source = JsonNovelSource::new(temp_dir.path());

        let chapters = source.load_chapters("demo.json").await.unwrap().unwrap();
        let titles: Vec<_> = chapters.iter().map(|c| c.title()).collect();
        assert_eq!(titles, [Some("b"), Some("a"), None]);
    }

    #[tokio::test]
    async fn test_non_array_is_parse_error() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("demo.json"), r#"{"title": "x"}"#).unwrap();
        let source = JsonNovelSource::new(temp_dir.path());

        assert!(matches!(
            source.load_chapters("demo.json").await,
            Err(SourceError::ParseError { .. })
        ));
    }
}

//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

use super::NovelError;

/// 源文件扩展名
pub const SOURCE_EXTENSION: &str = ".json";

/// 小说唯一标识
///
/// 由源文件名去掉 `.json` 后缀得到，同时用作输出目录名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NovelId(String);

impl NovelId {
    pub fn new(id: impl Into<String>) -> Result<Self, NovelError> {
        let id = id.into();
        if id.is_empty() {
            return Err(NovelError::InvalidId("小说 ID 不能为空".to_string()));
        }
        if id == "." || id == ".." || id.contains(['/', '\\']) {
            return Err(NovelError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// 从源文件名推导小说 ID
    ///
    /// 删除文件名中所有的 `.json`：`genius_grandson.json` -> `genius_grandson`，
    /// `a.json.bak.json` -> `a.bak`
    pub fn from_filename(filename: &str) -> Result<Self, NovelError> {
        Self::new(filename.replace(SOURCE_EXTENSION, ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NovelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NovelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_filename_strips_extension() {
        let id = NovelId::from_filename("nano_machine.json").unwrap();
        assert_eq!(id.as_str(), "nano_machine");
    }

    #[test]
    fn test_from_filename_without_extension() {
        let id = NovelId::from_filename("nano_machine").unwrap();
        assert_eq!(id.as_str(), "nano_machine");
    }

    #[test]
    fn test_every_extension_occurrence_is_removed() {
        let id = NovelId::from_filename("a.json.bak.json").unwrap();
        assert_eq!(id.as_str(), "a.bak");
    }

    #[test]
    fn test_invalid_ids() {
        assert!(NovelId::from_filename(".json").is_err());
        assert!(NovelId::new("..").is_err());
        assert!(NovelId::new("a/b").is_err());
        assert!(NovelId::new("a\\b").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = NovelId::new("剑来").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"剑来\"");
    }
}

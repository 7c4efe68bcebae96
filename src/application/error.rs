//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{SourceError, StorageError};
use crate::domain::novel::NovelError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 源文件读取或解析错误
    #[error("Source error: {0}")]
    SourceError(String),

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }
}

impl From<SourceError> for ApplicationError {
    fn from(err: SourceError) -> Self {
        Self::SourceError(err.to_string())
    }
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::FileNotFound(path) => Self::not_found("File", path),
            other => Self::StorageError(other.to_string()),
        }
    }
}

impl From<NovelError> for ApplicationError {
    fn from(err: NovelError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

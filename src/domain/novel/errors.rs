//! Novel Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("无效的小说 ID: {0}")]
    InvalidId(String),
}

//! Optimize Commands

/// 拆分单本小说
#[derive(Debug, Clone)]
pub struct OptimizeNovel {
    /// 源文件名（相对于数据目录，含 `.json` 后缀）
    pub filename: String,
}

/// 按顺序拆分一批小说
#[derive(Debug, Clone)]
pub struct OptimizeBatch {
    pub filenames: Vec<String>,
}

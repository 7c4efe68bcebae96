//! Novel Queries

/// 获取小说目录索引
#[derive(Debug, Clone)]
pub struct GetNovelIndex {
    pub novel_id: String,
}

/// 获取单章正文
#[derive(Debug, Clone)]
pub struct GetChapter {
    pub novel_id: String,
    pub index: usize,
}

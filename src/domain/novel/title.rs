//! 章节标题解析
//!
//! 源数据中的标题字段都是可选的，按 `title` -> `original_title` 的顺序取第一个非空值

/// 取第一个非空标题，两者都缺失或为空时返回 `None`
pub fn resolve_title(title: Option<&str>, original_title: Option<&str>) -> Option<String> {
    title
        .filter(|t| !t.is_empty())
        .or_else(|| original_title.filter(|t| !t.is_empty()))
        .map(str::to_string)
}

/// 目录用标题：解析失败时回退为 `Chapter {index + 1}`
pub fn resolve_summary_title(
    title: Option<&str>,
    original_title: Option<&str>,
    index: usize,
) -> String {
    resolve_title(title, original_title).unwrap_or_else(|| fallback_title(index))
}

#[inline]
fn fallback_title(index: usize) -> String {
    format!("Chapter {}", index + 1)
}

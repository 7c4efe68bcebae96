//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 源文件配置
    #[serde(default)]
    pub input: InputConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 源文件配置
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// 源 JSON 所在目录
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// 按顺序处理的源文件名（含 `.json` 后缀）
    #[serde(default = "default_novels")]
    pub novels: Vec<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

pub(crate) fn default_novels() -> Vec<String> {
    vec![
        "genius_grandson.json".to_string(),
        "lazy_sovereign.json".to_string(),
        "nano_machine.json".to_string(),
    ]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            novels: default_novels(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 拆分结果根目录
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,
}

fn default_root_dir() -> PathBuf {
    PathBuf::from("data/optimized")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.input.data_dir, PathBuf::from("data"));
        assert_eq!(config.input.novels.len(), 3);
        assert_eq!(config.input.novels[0], "genius_grandson.json");
        assert_eq!(config.output.root_dir, PathBuf::from("data/optimized"));
        assert_eq!(config.log.level, "info");
    }
}

//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（optimizer.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{default_novels, AppConfig};
use crate::domain::novel::NovelId;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["optimizer", "optimizer.local"];

/// 环境变量前缀
const ENV_PREFIX: &str = "ROVEL_OPTIMIZER";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `ROVEL_OPTIMIZER_`，层级分隔符 `__`）
/// 2. 配置文件（optimizer.toml 或 optimizer.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `ROVEL_OPTIMIZER_INPUT__DATA_DIR=/srv/novels`
/// - `ROVEL_OPTIMIZER_INPUT__NOVELS=a.json,b.json`
/// - `ROVEL_OPTIMIZER_OUTPUT__ROOT_DIR=/srv/novels/optimized`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("input.data_dir", "data")?
        .set_default("input.novels", default_novels())?
        .set_default("output.root_dir", "data/optimized")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级），novels 以逗号分隔
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("input.novels")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.input.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    if config.output.root_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Output root directory cannot be empty".to_string(),
        ));
    }

    // 输出目录名由文件名推导，必须落在输出根目录下
    for novel in &config.input.novels {
        NovelId::from_filename(novel).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid novel file name {:?}: {}", novel, e))
        })?;
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Optimizer Configuration ===");
    tracing::info!("Data Directory: {:?}", config.input.data_dir);
    tracing::info!("Novels: {:?}", config.input.novels);
    tracing::info!("Output Directory: {:?}", config.output.root_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("===============================");
}

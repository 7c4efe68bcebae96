//! Rovel Optimizer
//!
//! 按配置顺序拆分小说源文件，缺失的源文件会被跳过，其他错误终止运行

use std::sync::Arc;

use rovel_optimizer::application::{OptimizeBatch, OptimizeBatchHandler};
use rovel_optimizer::config::{load_config, print_config, LogConfig};
use rovel_optimizer::infrastructure::{FileOptimizedStore, JsonNovelSource};

fn init_logging(log: &LogConfig) {
    let log_filter = format!("{},rovel_optimizer={}", log.level, log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log);

    tracing::info!("Rovel Optimizer - 小说拆分");
    print_config(&config);

    let source = Arc::new(JsonNovelSource::new(&config.input.data_dir));
    let store = Arc::new(FileOptimizedStore::new(&config.output.root_dir));
    let handler = OptimizeBatchHandler::new(source, store);

    handler
        .handle(OptimizeBatch {
            filenames: config.input.novels.clone(),
        })
        .await?;

    tracing::info!("All novels processed");

    Ok(())
}

//! 日志工具模块
//!
//! 初始化 tracing 订阅者，并提供导入流程的格式化输出辅助函数

use crate::orchestrator::ImportStats;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 环境变量 RUST_LOG 优先；未设置时 verbose 决定 debug/info 级别
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// 记录批量导入开始信息
pub fn log_import_start(total: usize, max_concurrent: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始导入 - 共 {} 个文件", total);
    info!("📊 最大并发数: {}", max_concurrent);
    info!("{}", "=".repeat(60));
}

/// 输出批量导入统计
pub fn log_import_stats(stats: &ImportStats) {
    info!("{}", "=".repeat(60));
    info!("📊 导入完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {} 个文件, 共 {} 道题目", stats.imported, stats.questions);
    info!("⚠️ 未识别到题目: {}", stats.empty);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

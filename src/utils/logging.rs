//! 日志工具模块
//!
//! 提供控制台日志初始化和格式化输出的辅助函数

use crate::config::Config;
use crate::models::{InputFile, RunSummary};
use crate::workflow::PrintCtx;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化控制台日志
///
/// 优先使用 `RUST_LOG`；否则按 `verbose` 选择 debug 或 info。重复调用无副作用。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - {}", config.logger_name);
    info!("📁 图纸目录: {}", config.input_dir.display());
    info!(
        "🖨️ {} -> {} (程序: {})",
        config.input_extension, config.output_extension, config.process_name
    );
    info!("⚠️ 严重错误阈值: {}", config.error_threshold);
    info!("{}", "=".repeat(60));
}

/// 记录待打印文件列表
pub fn log_files_loaded(files: &[InputFile]) {
    let paths: Vec<String> = files
        .iter()
        .map(|f| f.path().display().to_string())
        .collect();
    info!("\nFollowing files will be printed: {:?}", paths);

    if files.is_empty() {
        warn!("⚠️ 没有找到待打印的文件");
    } else {
        info!("✓ 共 {} 个文件，逐个处理\n", files.len());
    }
}

/// 记录单个文件开始处理
pub fn log_file_start(ctx: &PrintCtx) {
    info!("\n{}", "─".repeat(60));
    info!("{} 开始处理 -> {}", ctx, ctx.output_name);
}

/// 打印最终统计信息
pub fn print_final_stats(summary: &RunSummary, log_file_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    if let Some(ended_at) = &summary.ended_at {
        info!("完成时间: {}", ended_at);
    }
    info!("{}", "=".repeat(60));
    info!("✅ 已打印: {}/{}", summary.printed(), summary.total());
    info!("⏭️ 已存在: {}", summary.already_printed());
    info!("❌ 打开失败: {}", summary.launch_failed());
    info!("❌ 未生成输出: {}", summary.critical());
    info!("❌ 意外错误: {}", summary.unexpected());
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path.display());
}

/// 操作员取消后的统计
pub fn log_aborted(summary: &RunSummary, remaining: usize) {
    warn!("\n{}", "=".repeat(60));
    warn!(
        "🛑 运行已被操作员取消: 已处理 {} 个文件，剩余 {} 个未处理",
        summary.total(),
        remaining
    );
    warn!("{}", "=".repeat(60));
}

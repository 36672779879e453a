use anyhow::Result;
/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志输出
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
/// 重复调用不会报错（测试中可多次调用）
///
/// # 参数
/// - `verbose`: 是否显示详细日志
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
/// - `source`: 题库来源（写入文件头）
pub fn init_log_file(log_file_path: &str, source: &str) -> Result<()> {
    let log_header = format!(
        "{}\n题库解析日志 - {}\n来源: {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        source,
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

/// 记录程序启动信息
///
/// # 参数
/// - `source`: 题库来源
/// - `total`: 标记中的题目总数
pub fn log_startup(source: &str, total: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 题库解析模式");
    info!("📄 题库来源: {}", source);
    info!("📊 题目标记总数: {}", total);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载结果
///
/// # 参数
/// - `total`: 题目数量
/// - `multiple`: 多选题数量
/// - `dangling`: 答案指向不存在选项的题目数量
/// - `origin`: 题库实际来源描述
pub fn log_bank_loaded(total: usize, multiple: usize, dangling: usize, origin: &str) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 题库加载完成: 共 {} 道题", total);
    info!("📋 多选题: {}", multiple);
    if dangling > 0 {
        info!("⚠️ 答案无对应选项: {}", dangling);
    }
    info!("📦 来源: {}", origin);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 可用题目数量
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(questions: usize, log_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 可用题目: {}", questions);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

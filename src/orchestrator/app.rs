//! 应用编排 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：写日志文件头、创建题库缓存 / 高亮服务 / 进度存储
//! 2. **题库加载**：取原文 → 解析 → 失败或为空时退回内置示例
//! 3. **结果输出**：统计、可选 JSON 导出、题干高亮预览
//! 4. **进度提示**：存在未过期的学习进度时给出提示

use crate::clients::QuestionSource;
use crate::config::Config;
use crate::models::QuestionRecord;
use crate::services::{HighlightService, LoadedBank, ProgressStore, QuestionBank};
use crate::utils::logging;
use anyhow::{Context, Result};
use tracing::info;

/// 应用主结构
pub struct App {
    config: Config,
    source: QuestionSource,
    bank: QuestionBank,
    highlighter: HighlightService,
    progress: ProgressStore,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file, &config.source)
            .with_context(|| format!("无法写入日志文件: {}", config.output_log_file))?;

        logging::log_startup(&config.source, config.question_total);

        let source = QuestionSource::from_location(&config.source);
        let bank = QuestionBank::new(config.parser());
        let highlighter = HighlightService::from_config(&config)?;
        let progress = ProgressStore::new(&config.progress_file, config.progress_ttl());

        Ok(Self {
            config,
            source,
            bank,
            highlighter,
            progress,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&mut self) -> Result<LoadedBank> {
        let loaded = self.bank.load_or_sample(&self.source).await;

        log_summary(&loaded);

        if let Some(path) = &self.config.export_file {
            export_questions(path, &loaded.questions).await?;
        }

        if self.config.verbose_logging {
            if let Some(first) = loaded.questions.first() {
                let highlighted = self.highlighter.highlight(&first.question).await;
                info!("🔍 题干预览: {}", highlighted.render_marked());
            }
        }

        if let Some(saved) = self.progress.load().await {
            info!(
                "💾 发现未完成的学习进度: 模式 {} | 第 {}/{} 题 | 正确率 {:.1}%",
                saved.mode,
                saved.current_index + 1,
                saved.total_questions,
                saved.progress.accuracy
            );
        }

        logging::print_final_stats(loaded.questions.len(), &self.config.output_log_file);

        Ok(loaded)
    }

    /// 清空题库缓存，下次运行时重新加载
    pub fn reload(&mut self) {
        self.bank.invalidate();
    }
}

fn log_summary(loaded: &LoadedBank) {
    let multiple = loaded
        .questions
        .iter()
        .filter(|q| q.answer.is_multiple())
        .count();
    let dangling = loaded
        .questions
        .iter()
        .filter(|q| !q.dangling_labels().is_empty())
        .count();

    logging::log_bank_loaded(
        loaded.questions.len(),
        multiple,
        dangling,
        &loaded.origin.to_string(),
    );

    for question in loaded.questions.iter().take(3) {
        info!("  {}", question);
    }
}

/// 把题目导出为 JSON 文件
async fn export_questions(path: &str, questions: &[QuestionRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("无法写入导出文件: {}", path))?;
    info!("✓ 已导出 {} 道题至: {}", questions.len(), path);
    Ok(())
}

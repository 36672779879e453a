//! 题库缓存 - 业务能力层
//!
//! 由调用方持有的显式缓存：同一来源只取一次、解析一次，
//! 需要重新加载时调用 `invalidate`

use crate::clients::QuestionSource;
use crate::error::AppResult;
use crate::models::QuestionRecord;
use crate::parser::QuestionParser;
use crate::services::sample_questions::sample_questions;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// 题库的实际来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankOrigin {
    /// 从原文解析得到
    Parsed,
    /// 原文解析出 0 道题，使用内置示例
    SampleAfterEmpty,
    /// 原文获取失败，使用内置示例
    SampleAfterError(String),
}

impl BankOrigin {
    pub fn is_sample(&self) -> bool {
        !matches!(self, BankOrigin::Parsed)
    }
}

impl fmt::Display for BankOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankOrigin::Parsed => write!(f, "题库原文"),
            BankOrigin::SampleAfterEmpty => write!(f, "内置示例 (原文中没有有效题目)"),
            BankOrigin::SampleAfterError(reason) => write!(f, "内置示例 (原文获取失败: {})", reason),
        }
    }
}

/// 加载结果
#[derive(Debug, Clone)]
pub struct LoadedBank {
    pub questions: Arc<[QuestionRecord]>,
    pub origin: BankOrigin,
}

/// 已缓存的解析结果
#[derive(Debug)]
struct CacheEntry {
    source: QuestionSource,
    questions: Arc<[QuestionRecord]>,
}

/// 题库缓存
pub struct QuestionBank {
    parser: QuestionParser,
    cache: Option<CacheEntry>,
}

impl QuestionBank {
    pub fn new(parser: QuestionParser) -> Self {
        Self {
            parser,
            cache: None,
        }
    }

    pub fn parser(&self) -> &QuestionParser {
        &self.parser
    }

    /// 加载题库
    ///
    /// 来源与缓存一致时直接返回缓存；否则取原文、解析并缓存。
    /// 原文取不到时返回错误，不缓存任何内容
    pub async fn load(&mut self, source: &QuestionSource) -> AppResult<Arc<[QuestionRecord]>> {
        if let Some(entry) = &self.cache {
            if &entry.source == source {
                info!("✓ 使用已缓存的题库 ({} 道题)", entry.questions.len());
                return Ok(entry.questions.clone());
            }
        }

        info!(
            "📥 正在加载题库: {} (标记总数 {})",
            source,
            self.parser().total()
        );
        let text = source.fetch().await?;
        Ok(self.store(source.clone(), &text))
    }

    /// 直接解析给定原文并以 `key` 缓存
    ///
    /// 原文已由调用方取得时使用，之后对同一 `key` 的 `load` 命中缓存
    pub fn parse_text(&mut self, key: QuestionSource, text: &str) -> Arc<[QuestionRecord]> {
        self.store(key, text)
    }

    /// 加载题库，失败或为空时使用内置示例
    ///
    /// 示例题目不会写入缓存
    pub async fn load_or_sample(&mut self, source: &QuestionSource) -> LoadedBank {
        match self.load(source).await {
            Ok(questions) if !questions.is_empty() => LoadedBank {
                questions,
                origin: BankOrigin::Parsed,
            },
            Ok(_) => {
                warn!("⚠️ 题库中没有有效题目，使用内置示例题目");
                LoadedBank {
                    questions: sample_questions().into(),
                    origin: BankOrigin::SampleAfterEmpty,
                }
            }
            Err(e) => {
                warn!("⚠️ 题库加载失败，使用内置示例题目: {}", e);
                LoadedBank {
                    questions: sample_questions().into(),
                    origin: BankOrigin::SampleAfterError(e.to_string()),
                }
            }
        }
    }

    /// 当前缓存的题目
    pub fn cached(&self) -> Option<Arc<[QuestionRecord]>> {
        self.cache.as_ref().map(|entry| entry.questions.clone())
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// 清空缓存
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            info!("🗑️ 题库缓存已清空");
        }
    }

    fn store(&mut self, source: QuestionSource, text: &str) -> Arc<[QuestionRecord]> {
        let questions: Arc<[QuestionRecord]> = self.parser.parse(text).into();
        self.cache = Some(CacheEntry {
            source,
            questions: questions.clone(),
        });
        questions
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::new(QuestionParser::default())
    }
}

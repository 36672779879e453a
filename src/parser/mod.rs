//! 题库文本解析器
//!
//! ## 职责
//!
//! 把一整份纯文本题库（"Question N of TOTAL" + 题干 + 选项 + 答案 + 解析）
//! 转换成有序的 `QuestionRecord` 列表。
//!
//! ## 流程
//!
//! ```text
//! 原文
//!   ↓ segment::split_sections   (按标记切段，段与序号绑定)
//!   ↓ section::parse_section    (逐行解析，格式不完整的段直接丢弃)
//! Vec<QuestionRecord>
//! ```
//!
//! 解析永远不会失败：格式错误只会让对应题目被跳过，
//! 输入为空或全部无效时返回空列表。

pub mod section;
pub mod segment;

pub use section::{parse_answer, parse_section, SectionMeta};
pub use segment::{split_sections, Section};

use crate::models::{Difficulty, QuestionRecord};
use tracing::{debug, info};

/// 默认题库题目总数
pub const DEFAULT_QUESTION_TOTAL: u32 = 529;
/// 默认题目分类
pub const DEFAULT_CATEGORY: &str = "AWS Solutions Architect";

/// 题库解析器
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionParser {
    total: u32,
    meta: SectionMeta,
}

impl QuestionParser {
    /// 创建解析器
    ///
    /// # 参数
    /// - `total`: 标记中的题目总数（"Question N of TOTAL" 的 TOTAL）
    /// - `category`: 所有题目的分类
    /// - `difficulty`: 所有题目的难度
    pub fn new(total: u32, category: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            total,
            meta: SectionMeta {
                category: category.into(),
                difficulty,
            },
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// 解析整份题库原文
    ///
    /// 相同输入总是得到相同输出
    pub fn parse(&self, text: &str) -> Vec<QuestionRecord> {
        let sections = split_sections(text, self.total);
        let section_count = sections.len();

        let questions: Vec<QuestionRecord> = sections
            .into_iter()
            .filter_map(|section| parse_section(section.body, section.ordinal, &self.meta))
            .inspect(|record| {
                let dangling = record.dangling_labels();
                if !dangling.is_empty() {
                    debug!("题目 {} 的答案 {:?} 没有对应选项", record.id, dangling);
                }
            })
            .collect();

        info!(
            "✓ 解析完成: {} 个片段, 有效题目 {} 道",
            section_count,
            questions.len()
        );

        questions
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION_TOTAL, DEFAULT_CATEGORY, Difficulty::Medium)
    }
}

//! 单道题目解析
//!
//! 逐行扫描一个题目片段：题干 → 选项 → 答案与解析

use crate::models::{Answer, Difficulty, QuestionRecord};
use tracing::debug;

/// 答案区块的独立标记行
pub const ANSWER_SECTION_MARKER: &str = "AnswerDiscussion";
/// 正确答案行前缀
pub const CORRECT_ANSWER_PREFIX: &str = "Correct Answer:";
/// 没有解析时的占位文本
pub const NO_EXPLANATION: &str = "No explanation available.";
/// 最多保留的选项数
pub const MAX_CHOICES: usize = 4;
/// 缺少答案行时的默认答案
pub const DEFAULT_ANSWER_LABEL: &str = "A";

/// 题目的固定元数据
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMeta {
    pub category: String,
    pub difficulty: Difficulty,
}

/// 逐行解析时的累积状态
#[derive(Debug, Default)]
struct SectionState {
    question: String,
    current_choice: String,
    explanation: String,
    choices: Vec<String>,
    answer: Option<Answer>,
    collecting_choices: bool,
    in_answer_section: bool,
}

impl SectionState {
    /// 把进行中的选项收入列表，超过上限的直接丢弃
    fn flush_choice(&mut self) {
        let choice = std::mem::take(&mut self.current_choice);
        let choice = choice.trim();
        if !choice.is_empty() && self.choices.len() < MAX_CHOICES {
            self.choices.push(choice.to_string());
        }
    }

    fn feed(&mut self, line: &str) {
        let answer_text = line.strip_prefix(CORRECT_ANSWER_PREFIX);

        if line == ANSWER_SECTION_MARKER || answer_text.is_some() {
            self.flush_choice();
            self.in_answer_section = true;
            self.collecting_choices = false;
            if let Some(rest) = answer_text {
                self.answer = parse_answer(rest);
            }
            return;
        }

        if self.in_answer_section {
            self.explanation.push_str(line);
            self.explanation.push(' ');
            return;
        }

        if is_choice_label(line) {
            self.flush_choice();
            self.collecting_choices = true;
            return;
        }

        let buffer = if self.collecting_choices {
            &mut self.current_choice
        } else {
            &mut self.question
        };
        push_joined(buffer, line);
    }

    fn finish(mut self, ordinal: u32, meta: &SectionMeta) -> Option<QuestionRecord> {
        self.flush_choice();

        let question = self.question.trim();
        if question.is_empty() || self.choices.len() < 2 {
            debug!(
                "题目 {} 无效，已跳过 (题干长度: {}, 选项数: {})",
                ordinal,
                question.len(),
                self.choices.len()
            );
            return None;
        }

        let answer = self
            .answer
            .unwrap_or_else(|| Answer::Single(DEFAULT_ANSWER_LABEL.to_string()));

        let explanation = match self.explanation.trim() {
            "" => NO_EXPLANATION.to_string(),
            text => text.to_string(),
        };

        Some(QuestionRecord {
            id: ordinal.to_string(),
            question: question.to_string(),
            choices: self.choices,
            answer,
            explanation,
            category: meta.category.clone(),
            difficulty: meta.difficulty,
        })
    }
}

/// 解析一个题目片段
///
/// 题干为空或选项少于 2 个时返回 `None`
pub fn parse_section(body: &str, ordinal: u32, meta: &SectionMeta) -> Option<QuestionRecord> {
    let mut state = SectionState::default();
    body.split('\n')
        .map(trim_text)
        .filter(|line| !line.is_empty())
        .for_each(|line| state.feed(line));
    state.finish(ordinal, meta)
}

/// 解析 "Correct Answer:" 之后的内容
///
/// 含逗号时为多选（去重，保持原顺序），否则为单选；内容为空返回 `None`
pub fn parse_answer(rest: &str) -> Option<Answer> {
    let rest = rest.trim();

    if rest.contains(',') {
        let mut labels: Vec<String> = Vec::new();
        for label in rest.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        }
        return (!labels.is_empty()).then_some(Answer::Multiple(labels));
    }

    (!rest.is_empty()).then(|| Answer::Single(rest.to_string()))
}

/// 去除首尾空白与 BOM
///
/// 多份题库文本拼接后，BOM 可能出现在任意行首
pub(crate) fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// 形如 "A." 的选项字母行
fn is_choice_label(line: &str) -> bool {
    matches!(line.as_bytes(), [letter, b'.'] if letter.is_ascii_uppercase())
}

fn push_joined(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push(' ');
    }
    buffer.push_str(line);
}

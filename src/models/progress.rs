use serde::{Deserialize, Serialize};
use std::fmt;

/// 学习模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    /// 闪卡复习
    Flashcard,
    /// 测验
    Quiz,
}

impl StudyMode {
    /// 切换到另一种模式
    pub fn toggled(self) -> Self {
        match self {
            StudyMode::Flashcard => StudyMode::Quiz,
            StudyMode::Quiz => StudyMode::Flashcard,
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudyMode::Flashcard => write!(f, "flashcard"),
            StudyMode::Quiz => write!(f, "quiz"),
        }
    }
}

/// 学习进度统计
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProgress {
    pub total_questions: usize,
    pub answered_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    /// 正确率（百分比）
    pub accuracy: f64,
    /// 已用时间（毫秒）
    pub time_spent_ms: u64,
}

impl StudyProgress {
    pub fn new(total_questions: usize) -> Self {
        Self {
            total_questions,
            ..Default::default()
        }
    }

    /// 记录一次作答并重新计算正确率
    pub fn record_answer(&mut self, is_correct: bool) {
        self.answered_questions += 1;
        if is_correct {
            self.correct_answers += 1;
        } else {
            self.incorrect_answers += 1;
        }
        self.accuracy = self.correct_answers as f64 / self.answered_questions as f64 * 100.0;
    }

    pub fn is_complete(&self) -> bool {
        self.total_questions > 0 && self.answered_questions >= self.total_questions
    }
}

/// 持久化的学习进度
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProgress {
    pub mode: StudyMode,
    pub current_index: usize,
    pub progress: StudyProgress,
    /// 保存时间（Unix 毫秒）
    pub timestamp: i64,
    pub total_questions: usize,
}

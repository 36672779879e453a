use crate::utils::truncate_text;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// 题目正确答案
///
/// 单选题只有一个选项字母，多选题保留原文中的字母顺序。
/// 序列化为字符串或字符串数组，与题库原始 JSON 形态一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// 所有正确选项字母
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Answer::Single(label) => vec![label.as_str()],
            Answer::Multiple(labels) => labels.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels().contains(&label)
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Answer::Multiple(_))
    }

    /// 判断一次作答是否正确
    ///
    /// 选中的字母集合必须与正确答案集合完全相同，顺序无关
    pub fn check(&self, selected: &[&str]) -> bool {
        let expected: BTreeSet<&str> = self.labels().into_iter().collect();
        let submitted: BTreeSet<&str> = selected.iter().map(|s| s.trim()).collect();
        !submitted.is_empty() && expected == submitted
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels().join(", "))
    }
}

/// 题目难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("未知难度: {}", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 解析后的单道题目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题目序号（来自 "Question N of TOTAL" 中的 N）
    pub id: String,
    pub question: String,
    pub choices: Vec<String>,
    pub answer: Answer,
    pub explanation: String,
    pub category: String,
    pub difficulty: Difficulty,
}

impl QuestionRecord {
    /// 选项下标对应的字母，0 -> 'A'
    pub fn label_for(index: usize) -> Option<char> {
        if index < 26 {
            Some((b'A' + index as u8) as char)
        } else {
            None
        }
    }

    /// 根据字母取选项内容
    pub fn choice_for(&self, label: &str) -> Option<&str> {
        let mut chars = label.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return None;
        };
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let index = (letter as u8 - b'A') as usize;
        self.choices.get(index).map(String::as_str)
    }

    pub fn is_correct(&self, label: &str) -> bool {
        self.answer.contains(label)
    }

    /// 指向不存在选项的答案字母
    ///
    /// 选项超过 4 个被截断时，答案可能落在被丢弃的选项上；这里只报告，不修正
    pub fn dangling_labels(&self) -> Vec<&str> {
        self.answer
            .labels()
            .into_iter()
            .filter(|label| self.choice_for(label).is_none())
            .collect()
    }
}

impl fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let preview = truncate_text(&self.question, 80);
        write!(f, "#{} {} [答案: {}]", self.id, preview, self.answer)
    }
}

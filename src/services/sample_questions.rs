//! 内置示例题目
//!
//! 题库取不到或解析不出任何题目时使用

use crate::models::{Answer, Difficulty, QuestionRecord};

/// (题干, 选项, 正确答案, 分类, 难度)
const SAMPLES: &[(&str, [&str; 4], &str, &str, Difficulty)] = &[
    (
        "What is the capital of France?",
        ["London", "Berlin", "Paris", "Madrid"],
        "C",
        "Geography",
        Difficulty::Easy,
    ),
    (
        "Which planet is known as the Red Planet?",
        ["Venus", "Mars", "Jupiter", "Saturn"],
        "B",
        "Science",
        Difficulty::Easy,
    ),
    (
        "What is the chemical symbol for gold?",
        ["Go", "Gd", "Au", "Ag"],
        "C",
        "Chemistry",
        Difficulty::Medium,
    ),
    (
        "Who painted the Mona Lisa?",
        ["Pablo Picasso", "Vincent van Gogh", "Leonardo da Vinci", "Michelangelo"],
        "C",
        "Art",
        Difficulty::Easy,
    ),
    (
        "What is the largest mammal in the world?",
        ["African elephant", "Blue whale", "Giraffe", "Polar bear"],
        "B",
        "Biology",
        Difficulty::Easy,
    ),
    (
        "In which year did World War II end?",
        ["1943", "1944", "1945", "1946"],
        "C",
        "History",
        Difficulty::Medium,
    ),
    (
        "What is the smallest prime number?",
        ["0", "1", "2", "3"],
        "C",
        "Mathematics",
        Difficulty::Easy,
    ),
    (
        "Which gas makes up approximately 78% of Earth's atmosphere?",
        ["Oxygen", "Carbon dioxide", "Nitrogen", "Argon"],
        "C",
        "Science",
        Difficulty::Medium,
    ),
];

/// 内置示例题目列表
pub fn sample_questions() -> Vec<QuestionRecord> {
    SAMPLES
        .iter()
        .enumerate()
        .map(
            |(i, (question, choices, answer, category, difficulty))| QuestionRecord {
                id: (i + 1).to_string(),
                question: question.to_string(),
                choices: choices.iter().map(|c| c.to_string()).collect(),
                answer: Answer::Single(answer.to_string()),
                explanation: crate::parser::section::NO_EXPLANATION.to_string(),
                category: category.to_string(),
                difficulty: *difficulty,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_well_formed() {
        let samples = sample_questions();
        assert_eq!(samples.len(), 8);
        for q in &samples {
            assert_eq!(q.choices.len(), 4);
            assert!(q.dangling_labels().is_empty(), "题目 {} 答案无效", q.id);
        }
        assert_eq!(samples[0].choice_for("C"), Some("Paris"));
    }
}

//! 本地关键词高亮 - 业务能力层
//!
//! 用固定关键词表在题干中标注关键短语，不依赖任何外部服务

use crate::error::HighlightError;
use crate::models::{HighlightedText, KeyPhrase};
use regex::{Regex, RegexBuilder};

/// 本地匹配的固定分数
pub const LOCAL_MATCH_SCORE: f64 = 0.9;

/// 考试常见术语
const EXAM_TERMS: &[&str] = &[
    "which",
    "how",
    "primary",
    "most cost-effective",
    "select TWO",
    "select THREE",
    "meet the requirements",
    "minimal change",
    "high availability",
    "reduce costs",
    "improve performance",
    "ensure",
    "fault tolerance",
    "scalability",
    "security",
    "operational overhead",
    "latency",
    "cross-region",
    "data replication",
    "automate",
    "resilience",
    "compliance",
    "monitoring",
    "encryption",
    "migration",
    "cross-account access",
    "resource-based policy",
    "External ID",
    "AWS Organizations",
    "Service Control Policy (SCP)",
    "AWS Control Tower",
    "AWS Resource Access Manager (RAM)",
    "VPC peering",
    "AWS Transit Gateway",
    "VPC endpoint",
    "NAT instance",
    "AWS Direct Connect",
    "VPN Site-to-Site",
    "Pilot Light strategy",
    "Warm Standby strategy",
    "CloudFormation drift detection",
    "IAM role and trust policy",
    "AWS Single Sign-On (IAM Identity Center)",
    "SAML 2.0 federation",
    "Amazon Cognito",
    "AWS Key Management Service (KMS)",
    "server-side encryption (SSE)",
    "Cross-Origin Resource Sharing (CORS)",
    "AWS App Runner",
    "API Gateway quotas and concurrency",
    "Systems Manager Run Command",
    "Trusted Advisor and Cost Explorer",
    "Direct Connect Gateway and virtual interface",
    "AWS DataSync",
    "Cloud Adoption Readiness Tool (CART)",
    "Application Migration Service (MGN)",
    "Systems Manager Parameter Store",
    "Auto Scaling Rolling Update",
    "DeletionPolicy Retain/Snapshot",
    "Control Tower guardrails",
];

/// 题干中的疑问/限定词
const QUESTION_WORDS: &[&str] = &[
    "which", "what", "how", "best", "most", "correct", "primary", "main",
];

/// 关键词高亮器
#[derive(Debug, Clone)]
pub struct KeywordHighlighter {
    patterns: Vec<Regex>,
    limit: Option<usize>,
}

impl KeywordHighlighter {
    /// 用自定义关键词表创建
    ///
    /// 每个关键词按 `\b词\b` 忽略大小写匹配
    pub fn new<I, S>(phrases: I, limit: Option<usize>) -> Result<Self, HighlightError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = phrases
            .into_iter()
            .map(|phrase| {
                let phrase = phrase.as_ref();
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| HighlightError::InvalidPattern {
                        phrase: phrase.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns, limit })
    }

    /// 考试术语表，不限数量
    pub fn exam_terms() -> Result<Self, HighlightError> {
        Self::new(EXAM_TERMS, None)
    }

    /// 疑问词表，最多 4 个
    pub fn question_words() -> Result<Self, HighlightError> {
        Self::new(QUESTION_WORDS, Some(4))
    }

    /// 标注文本中的所有关键词
    pub fn highlight(&self, text: &str) -> HighlightedText {
        let phrases: Vec<KeyPhrase> = self
            .patterns
            .iter()
            .flat_map(|re| re.find_iter(text))
            .map(|m| KeyPhrase {
                text: m.as_str().to_string(),
                score: LOCAL_MATCH_SCORE,
                begin_offset: m.start(),
                end_offset: m.end(),
            })
            .collect();

        let mut highlighted = HighlightedText::new(text, phrases);
        if let Some(limit) = self.limit {
            highlighted.key_phrases.truncate(limit);
        }
        highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_word_boundaries() {
        let hl = KeywordHighlighter::exam_terms().unwrap();
        let result = hl.highlight("WHICH solution ensures High Availability? Ensured is not a match.");
        let texts: Vec<&str> = result.key_phrases.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["WHICH", "High Availability"]);
        assert_eq!(result.key_phrases[0].begin_offset, 0);
        assert_eq!(result.key_phrases[0].score, LOCAL_MATCH_SCORE);
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let hl = KeywordHighlighter::exam_terms().unwrap();
        let text = "Enable server-side encryption (SSE) on the bucket.";
        let result = hl.highlight(text);
        let found = result
            .key_phrases
            .iter()
            .find(|k| k.text == "encryption")
            .unwrap();
        assert_eq!(&text[found.begin_offset..found.end_offset], "encryption");
        // 以 ")" 结尾的短语后面没有单词边界时不会命中
        assert!(result
            .key_phrases
            .iter()
            .all(|k| k.text != "server-side encryption (SSE)"));
    }

    #[test]
    fn test_question_words_limit_and_order() {
        let hl = KeywordHighlighter::question_words().unwrap();
        let result = hl.highlight("What is the best and most correct way, which is the main one?");
        let texts: Vec<&str> = result.key_phrases.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["What", "best", "most", "correct"]);
    }

    #[test]
    fn test_no_matches() {
        let hl = KeywordHighlighter::question_words().unwrap();
        let result = hl.highlight("Nothing here.");
        assert!(result.key_phrases.is_empty());
        assert_eq!(result.original, "Nothing here.");
    }
}

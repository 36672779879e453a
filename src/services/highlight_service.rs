//! 关键词高亮服务 - 业务能力层
//!
//! 优先使用远程关键词服务，失败时退回本地关键词表

use crate::clients::KeyPhraseClient;
use crate::config::Config;
use crate::error::AppResult;
use crate::models::HighlightedText;
use crate::services::highlighter::KeywordHighlighter;
use tracing::{debug, warn};

/// 关键词高亮服务
///
/// 职责：
/// - 远程服务可用时使用远程结果
/// - 远程失败（网络、状态码、解码）时使用本地结果
/// - 不做重试
pub struct HighlightService {
    remote: Option<KeyPhraseClient>,
    fallback: KeywordHighlighter,
}

impl HighlightService {
    pub fn new(remote: Option<KeyPhraseClient>, fallback: KeywordHighlighter) -> Self {
        Self { remote, fallback }
    }

    /// 按配置创建：未配置远程地址时只使用本地考试术语表
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let remote = KeyPhraseClient::from_config(config)?;
        let fallback = match remote {
            Some(_) => KeywordHighlighter::question_words()?,
            None => KeywordHighlighter::exam_terms()?,
        };
        Ok(Self::new(remote, fallback))
    }

    /// 标注关键短语
    pub async fn highlight(&self, text: &str) -> HighlightedText {
        let Some(remote) = &self.remote else {
            return self.fallback.highlight(text);
        };

        match remote.detect(text).await {
            Ok(highlighted) => {
                debug!("✓ 远程关键词服务返回 {} 个短语", highlighted.key_phrases.len());
                highlighted
            }
            Err(e) => {
                warn!("⚠️ 关键词服务不可用，使用本地关键词表: {}", e);
                self.fallback.highlight(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_local_only() {
        let service = HighlightService::from_config(&Config::default()).unwrap();
        let result = service.highlight("Which option is most cost-effective?").await;
        let texts: Vec<&str> = result.key_phrases.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["Which", "most cost-effective"]);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back() {
        let remote = KeyPhraseClient::new(
            "http://127.0.0.1:9/highlight-text",
            0.85,
            Duration::from_secs(2),
        )
        .unwrap();
        let service =
            HighlightService::new(Some(remote), KeywordHighlighter::question_words().unwrap());
        let result = service.highlight("What is the best choice?").await;
        let texts: Vec<&str> = result.key_phrases.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["What", "best"]);
    }
}

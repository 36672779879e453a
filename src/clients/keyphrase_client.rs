/// 关键词服务客户端
///
/// 把题干发送给远程关键词服务，取回带分数和偏移量的关键短语
use crate::config::Config;
use crate::error::{AppResult, HighlightError};
use crate::models::HighlightedText;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// 每段文本最多保留的关键短语数
pub const MAX_REMOTE_PHRASES: usize = 4;

#[derive(Debug, Serialize)]
struct KeyPhraseRequest<'a> {
    text: &'a str,
}

/// 关键词服务客户端
pub struct KeyPhraseClient {
    http: reqwest::Client,
    endpoint: String,
    min_score: f64,
}

impl KeyPhraseClient {
    /// 创建新的关键词客户端
    pub fn new(endpoint: impl Into<String>, min_score: f64, timeout: Duration) -> AppResult<Self> {
        let endpoint = endpoint.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| HighlightError::RequestFailed {
                endpoint: endpoint.clone(),
                source,
            })?;
        Ok(Self {
            http,
            endpoint,
            min_score,
        })
    }

    /// 按配置创建，未配置服务地址时返回 `None`
    pub fn from_config(config: &Config) -> AppResult<Option<Self>> {
        config
            .keyphrase_endpoint
            .as_deref()
            .map(|endpoint| {
                Self::new(
                    endpoint,
                    config.keyphrase_min_score,
                    config.keyphrase_timeout(),
                )
            })
            .transpose()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 请求关键短语
    ///
    /// 只保留分数高于阈值的前 4 个，按偏移排序
    pub async fn detect(&self, text: &str) -> Result<HighlightedText, HighlightError> {
        if text.trim().is_empty() {
            return Err(HighlightError::EmptyText);
        }

        debug!("正在请求关键词服务: {}", self.endpoint());

        let response = self
            .http
            .post(&self.endpoint)
            .json(&KeyPhraseRequest { text })
            .send()
            .await
            .map_err(|source| self.request_failed(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HighlightError::BadStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body: HighlightedText = response
            .json()
            .await
            .map_err(|source| self.request_failed(source))?;

        debug!("关键词服务返回 {} 个短语", body.key_phrases.len());

        Ok(self.select(text, body))
    }

    fn select(&self, text: &str, body: HighlightedText) -> HighlightedText {
        let phrases = body
            .key_phrases
            .into_iter()
            .filter(|kp| kp.score > self.min_score)
            .take(MAX_REMOTE_PHRASES)
            .collect();
        HighlightedText::new(text, phrases)
    }

    fn request_failed(&self, source: reqwest::Error) -> HighlightError {
        HighlightError::RequestFailed {
            endpoint: self.endpoint.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyPhrase;

    fn kp(text: &str, score: f64, begin: usize) -> KeyPhrase {
        KeyPhrase {
            text: text.to_string(),
            score,
            begin_offset: begin,
            end_offset: begin + text.len(),
        }
    }

    #[test]
    fn test_select_filters_limits_and_sorts() {
        let client =
            KeyPhraseClient::new("http://127.0.0.1:9/highlight-text", 0.85, Duration::from_secs(1))
                .unwrap();
        let body = HighlightedText {
            original: "ignored".to_string(),
            key_phrases: vec![
                kp("e", 0.99, 40),
                kp("low", 0.5, 0),
                kp("d", 0.9, 30),
                kp("c", 0.95, 20),
                kp("b", 0.86, 10),
                kp("a", 0.97, 5),
            ],
        };
        let selected = client.select("the text", body);
        let texts: Vec<&str> = selected.key_phrases.iter().map(|k| k.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "d", "e"]);
        assert_eq!(selected.original, "the text");
    }

    #[tokio::test]
    async fn test_empty_text_rejected() {
        let client =
            KeyPhraseClient::new("http://127.0.0.1:9/highlight-text", 0.85, Duration::from_secs(1))
                .unwrap();
        assert!(matches!(
            client.detect("   ").await,
            Err(HighlightError::EmptyText)
        ));
    }

    #[test]
    fn test_from_config_without_endpoint() {
        assert!(KeyPhraseClient::from_config(&Config::default())
            .unwrap()
            .is_none());

        let config = Config {
            keyphrase_endpoint: Some("http://localhost:3001/highlight-text".to_string()),
            ..Config::default()
        };
        let client = KeyPhraseClient::from_config(&config).unwrap().unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3001/highlight-text");
    }
}

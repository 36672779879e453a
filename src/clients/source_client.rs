/// 题库原文来源
///
/// 负责把题库原文取回成一个字符串，取不到时返回 `SourceError`
use crate::error::{AppError, AppResult, SourceError};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// 题库原文来源
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QuestionSource {
    /// 本地文本文件
    File(PathBuf),
    /// http(s) 地址
    Http(String),
    /// 直接给出的原文
    Inline(String),
}

impl QuestionSource {
    /// 根据位置字符串判断来源类型
    pub fn from_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            QuestionSource::Http(location.to_string())
        } else {
            QuestionSource::File(PathBuf::from(location))
        }
    }

    /// 获取原文
    ///
    /// 不做重试；任何读取或网络错误都作为原文获取失败返回
    pub async fn fetch(&self) -> AppResult<String> {
        match self {
            QuestionSource::File(path) => {
                debug!("正在读取题库文件: {}", path.display());
                let bytes = tokio::fs::read(path)
                    .await
                    .map_err(|e| AppError::source_read_failed(path.display().to_string(), e))?;
                // 非法 UTF-8 字节替换为 U+FFFD，与 HTTP 来源一致
                let text = String::from_utf8_lossy(&bytes).into_owned();
                info!("✓ 已读取题库文件 ({} 字节)", text.len());
                Ok(text)
            }
            QuestionSource::Http(url) => fetch_url(url).await,
            QuestionSource::Inline(text) => Ok(text.clone()),
        }
    }
}

async fn fetch_url(url: &str) -> AppResult<String> {
    debug!("正在请求题库: {}", url);

    let response = reqwest::get(url)
        .await
        .map_err(|e| AppError::source_request_failed(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Source(SourceError::BadStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }));
    }

    let text = response
        .text()
        .await
        .map_err(|e| AppError::source_request_failed(url, e))?;

    info!("✓ 已下载题库 ({} 字节)", text.len());
    Ok(text)
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::File(path) => write!(f, "file:{}", path.display()),
            QuestionSource::Http(url) => write!(f, "{}", url),
            QuestionSource::Inline(text) => write!(f, "inline:{} bytes", text.len()),
        }
    }
}

//! 学习进度存储 - 业务能力层
//!
//! 把当前学习进度保存为 JSON 文件，过期或损坏的记录在读取时自动删除

use crate::error::{AppError, AppResult};
use crate::models::{SavedProgress, StudyMode, StudyProgress};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// 学习进度存储
pub struct ProgressStore {
    path: PathBuf,
    ttl: Duration,
}

impl ProgressStore {
    /// 创建新的进度存储
    ///
    /// # 参数
    /// - `path`: 进度文件路径
    /// - `ttl`: 进度有效期，超过后视为不存在
    pub fn new(path: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            path: path.into(),
            ttl,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存进度（时间戳取当前时间）
    pub async fn save(
        &self,
        mode: StudyMode,
        current_index: usize,
        progress: &StudyProgress,
        total_questions: usize,
    ) -> AppResult<SavedProgress> {
        let saved = SavedProgress {
            mode,
            current_index,
            progress: progress.clone(),
            timestamp: chrono::Utc::now().timestamp_millis(),
            total_questions,
        };
        self.write(&saved).await?;
        Ok(saved)
    }

    /// 写入一条完整记录
    pub async fn write(&self, saved: &SavedProgress) -> AppResult<()> {
        let json = serde_json::to_string_pretty(saved)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| AppError::file_write_failed(self.path.display().to_string(), e))?;
        debug!(
            "进度已保存: 模式 {} | 第 {} 题",
            saved.mode,
            saved.current_index + 1
        );
        Ok(())
    }

    /// 读取进度
    ///
    /// 文件不存在返回 `None`；内容损坏或已过期时删除文件并返回 `None`
    pub async fn load(&self) -> Option<SavedProgress> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("读取进度文件失败 {}: {}", self.path().display(), e);
                self.discard().await;
                return None;
            }
        };

        let saved: SavedProgress = match serde_json::from_str(&content) {
            Ok(saved) => saved,
            Err(e) => {
                warn!("进度文件已损坏，已删除: {}", e);
                self.discard().await;
                return None;
            }
        };

        if !self.is_recent(saved.timestamp) {
            debug!("进度已过期，已删除");
            self.discard().await;
            return None;
        }

        Some(saved)
    }

    /// 删除进度文件
    pub async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::file_delete_failed(
                self.path.display().to_string(),
                e,
            )),
        }
    }

    /// 是否存在未过期的进度
    pub async fn exists(&self) -> bool {
        self.load().await.is_some()
    }

    /// 时间戳在 `(now - ttl, now]` 之内；溢出或来自未来都视为过期
    fn is_recent(&self, timestamp: i64) -> bool {
        let ttl_ms = i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX);
        chrono::Utc::now()
            .timestamp_millis()
            .checked_sub(timestamp)
            .is_some_and(|age_ms| (0..ttl_ms).contains(&age_ms))
    }

    async fn discard(&self) {
        if let Err(e) = self.clear().await {
            warn!("{}", e);
        }
    }
}

use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::Difficulty;
use crate::parser::{QuestionParser, DEFAULT_CATEGORY, DEFAULT_QUESTION_TOTAL};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 指定 TOML 配置文件路径的环境变量
pub const CONFIG_FILE_ENV: &str = "QUESTION_BANK_CONFIG";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 题库原文位置（本地路径或 http(s) URL）
    pub source: String,
    /// 标记中的题目总数
    pub question_total: u32,
    /// 题目分类
    pub category: String,
    /// 题目难度
    pub difficulty: Difficulty,
    // --- 关键词服务配置 ---
    /// 关键词服务地址，未设置时只使用本地关键词表
    pub keyphrase_endpoint: Option<String>,
    pub keyphrase_min_score: f64,
    pub keyphrase_timeout_secs: u64,
    // --- 学习进度配置 ---
    pub progress_file: String,
    /// 进度有效期（小时）
    pub progress_ttl_hours: u64,
    /// 导出解析结果的 JSON 文件
    pub export_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: "questions.txt".to_string(),
            question_total: DEFAULT_QUESTION_TOTAL,
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: Difficulty::Medium,
            keyphrase_endpoint: None,
            keyphrase_min_score: 0.85,
            keyphrase_timeout_secs: 10,
            progress_file: "study_progress.json".to_string(),
            progress_ttl_hours: 24,
            export_file: None,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 在默认值基础上应用环境变量
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取，缺失的字段使用默认值
    pub fn from_toml_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })
        })
    }

    /// 加载配置：先读 `QUESTION_BANK_CONFIG` 指向的 TOML 文件（如有），再应用环境变量
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_toml_file(path.trim())?,
            _ => Self::default(),
        };
        let config = base.with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            source: env_string("QUESTION_SOURCE").unwrap_or(self.source),
            question_total: env_parse("QUESTION_TOTAL", "u32")?.unwrap_or(self.question_total),
            category: env_string("QUESTION_CATEGORY").unwrap_or(self.category),
            difficulty: env_parse("QUESTION_DIFFICULTY", "easy|medium|hard")?
                .unwrap_or(self.difficulty),
            keyphrase_endpoint: env_string("KEYPHRASE_ENDPOINT").or(self.keyphrase_endpoint),
            keyphrase_min_score: env_parse("KEYPHRASE_MIN_SCORE", "f64")?
                .unwrap_or(self.keyphrase_min_score),
            keyphrase_timeout_secs: env_parse("KEYPHRASE_TIMEOUT_SECS", "u64")?
                .unwrap_or(self.keyphrase_timeout_secs),
            progress_file: env_string("PROGRESS_FILE").unwrap_or(self.progress_file),
            progress_ttl_hours: env_parse("PROGRESS_TTL_HOURS", "u64")?
                .unwrap_or(self.progress_ttl_hours),
            export_file: env_string("EXPORT_FILE").or(self.export_file),
            verbose_logging: env_parse("VERBOSE_LOGGING", "bool")?
                .unwrap_or(self.verbose_logging),
            output_log_file: env_string("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        })
    }

    /// 校验配置值
    pub fn validate(&self) -> AppResult<()> {
        if self.source.trim().is_empty() {
            return Err(invalid("source", "题库位置不能为空"));
        }
        if self.question_total == 0 {
            return Err(invalid("question_total", "题目总数必须大于 0"));
        }
        if !(0.0..=1.0).contains(&self.keyphrase_min_score) {
            return Err(invalid("keyphrase_min_score", "必须在 0 到 1 之间"));
        }
        Ok(())
    }

    /// 按配置创建解析器
    pub fn parser(&self) -> QuestionParser {
        QuestionParser::new(self.question_total, self.category.clone(), self.difficulty)
    }

    pub fn progress_ttl(&self) -> Duration {
        Duration::from_secs(self.progress_ttl_hours.saturating_mul(60 * 60))
    }

    pub fn keyphrase_timeout(&self) -> Duration {
        Duration::from_secs(self.keyphrase_timeout_secs)
    }
}

fn invalid(field: &str, reason: &str) -> AppError {
    AppError::Config(ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    })
}

fn env_string(var_name: &str) -> Option<String> {
    std::env::var(var_name).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    let Some(value) = env_string(var_name) else {
        return Ok(None);
    };
    value.trim().parse().map(Some).map_err(|_| {
        AppError::Config(ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value,
            expected_type: expected_type.to_string(),
        })
    })
}

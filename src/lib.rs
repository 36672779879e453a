//! # Question Bank
//!
//! 把纯文本考试题库解析成结构化题目的 Rust 库
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 与外部资源打交道，只负责"取回数据"
//! - `QuestionSource` - 本地文件 / http(s) / 内联原文
//! - `KeyPhraseClient` - 远程关键词服务
//!
//! ### ② 解析层（Parser）
//! - `parser/` - 纯函数，原文 → `Vec<QuestionRecord>`，永不失败
//!
//! ### ③ 业务能力层（Services）
//! - `QuestionBank` - 调用方持有的题库缓存，可显式清空
//! - `HighlightService` / `KeywordHighlighter` - 题干关键词标注
//! - `ProgressStore` - 学习进度持久化
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::App` - 命令行入口使用的完整流程
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod parser;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::QuestionSource;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, Difficulty, QuestionRecord};
pub use orchestrator::App;
pub use parser::QuestionParser;
pub use services::{BankOrigin, LoadedBank, QuestionBank};

//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (初始化、加载、输出)
//!     ↓
//! services (能力层：题库缓存 / 高亮 / 进度存储)
//!     ↓
//! parser (纯函数：原文 → Vec<QuestionRecord>)
//!     ↓
//! clients (原文获取 / 关键词服务)
//! ```

pub mod app;

pub use app::App;

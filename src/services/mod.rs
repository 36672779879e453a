pub mod highlight_service;
pub mod highlighter;
pub mod progress_store;
pub mod question_bank;
pub mod sample_questions;

pub use highlight_service::HighlightService;
pub use highlighter::KeywordHighlighter;
pub use progress_store::ProgressStore;
pub use question_bank::{BankOrigin, LoadedBank, QuestionBank};
pub use sample_questions::sample_questions;

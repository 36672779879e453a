pub mod keyphrase;
pub mod progress;
pub mod question;

pub use keyphrase::{HighlightedText, KeyPhrase};
pub use progress::{SavedProgress, StudyMode, StudyProgress};
pub use question::{Answer, Difficulty, QuestionRecord};

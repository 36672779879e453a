pub mod keyphrase_client;
pub mod source_client;

pub use keyphrase_client::KeyPhraseClient;
pub use source_client::QuestionSource;

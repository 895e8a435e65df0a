pub mod models;
pub mod services;

pub use models::Vocabulary;
pub use services::WordsConverter;

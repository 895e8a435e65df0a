pub mod words_converter;

pub use words_converter::WordsConverter;

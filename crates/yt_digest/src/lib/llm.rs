pub mod openai;
pub mod speech;
pub mod summarizer;

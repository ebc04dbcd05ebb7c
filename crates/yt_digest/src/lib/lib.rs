pub mod config;
mod digest;
mod error;
pub mod language;
mod llm;
pub mod parser;
pub mod server;
pub mod tracing;
pub mod transcript;

pub use digest::{builder::DigestServiceBuilder, DigestService, VideoSummary};
pub use error::{Error, ErrorBody};
pub use llm::openai;
pub use llm::{
    speech::SpeechSynthesizer,
    summarizer::{system_prompt, Summarizer, SummaryResponse},
};

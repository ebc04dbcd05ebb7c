use std::{fmt::Display, future::Future};

use serde::Deserialize;

use crate::language::Language;

const SYSTEM_PROMPT_EN: &str = include_str!("./prompts/summary_en.txt");
const SYSTEM_PROMPT_HI: &str = include_str!("./prompts/summary_hi.txt");
const SYSTEM_PROMPT_MR: &str = include_str!("./prompts/summary_mr.txt");

pub trait Summarizer {
    const TEMPERATURE: f64 = 0.5;
    const TOP_P: f64 = 0.9;
    const MAX_TOKENS: u32 = 800;

    type Error: Display;

    fn summarize(
        &self,
        transcript: &str,
        language_code: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Instruction for summarizing in the given language, English for unknown codes
pub fn system_prompt(language_code: &str) -> &'static str {
    match Language::from_code(language_code).unwrap_or_default() {
        Language::English => SYSTEM_PROMPT_EN,
        Language::Hindi => SYSTEM_PROMPT_HI,
        Language::Marathi => SYSTEM_PROMPT_MR,
    }
}

#![allow(dead_code)]

pub mod speech;
pub mod summarizer;
pub mod transcripts;

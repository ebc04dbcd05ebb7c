use std::future::Future;

use yt_transcript::{FetchedTranscript, TranscriptError, YouTubeTranscriptApi};

/// Most characters of a transcript ever sent for summarization
pub const MAX_TRANSCRIPT_CHARS: usize = 12_000;
/// Characters of the transcript echoed back to the client
pub const EXCERPT_CHARS: usize = 300;

pub trait TranscriptProvider {
    /// Fetches the transcript of `video_id` in exactly `language_code`
    fn fetch_transcript(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> impl Future<Output = Result<FetchedTranscript, TranscriptError>> + Send;
}

impl TranscriptProvider for YouTubeTranscriptApi {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<FetchedTranscript, TranscriptError> {
        self.fetch(video_id, &[language_code]).await
    }
}

/// Transcript text ready for summarization
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Space-joined segments, trimmed and capped at [`MAX_TRANSCRIPT_CHARS`]
    pub text: String,
    pub language_code: String,
}

impl From<FetchedTranscript> for Transcript {
    fn from(fetched: FetchedTranscript) -> Self {
        let text = truncate_chars(fetched.text().trim(), MAX_TRANSCRIPT_CHARS).to_string();
        Transcript {
            text,
            language_code: fetched.language_code,
        }
    }
}

impl Transcript {
    /// The first [`EXCERPT_CHARS`] characters followed by an ellipsis
    pub fn excerpt(&self) -> String {
        format!("{}...", truncate_chars(&self.text, EXCERPT_CHARS))
    }
}

/// Longest prefix of `s` holding at most `max_chars` characters
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

pub mod builder;

use bytes::Bytes;
use serde::Serialize;

use crate::{
    error::Error,
    language::PREFERRED_LANGUAGES,
    parser::extract_video_id,
    transcript::{Transcript, TranscriptProvider},
    SpeechSynthesizer, Summarizer,
};

/// Summary of a single video, as returned to the client
#[derive(Debug, Clone, Serialize)]
pub struct VideoSummary {
    pub video_id: String,
    pub language: String,
    pub transcript_excerpt: String,
    pub summary: String,
}

/// Fetch → summarize, and speak, over injected upstream clients.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Debug)]
pub struct DigestService<P, S, V>
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    transcripts: P,
    summarizer: S,
    speech: V,
}

impl<P, S, V> DigestService<P, S, V>
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    pub fn new(transcripts: P, summarizer: S, speech: V) -> Self {
        DigestService {
            transcripts,
            summarizer,
            speech,
        }
    }

    /// Fetches the transcript of the video behind `youtube_url` and summarizes it
    /// in the transcript's language
    #[tracing::instrument(skip(self))]
    pub async fn summarize_video(&self, youtube_url: &str) -> Result<VideoSummary, Error> {
        let video_id = extract_video_id(youtube_url).ok_or(Error::InvalidUrl)?;

        let transcript = self.fetch_transcript(&video_id).await?;

        let summary = self
            .summarizer
            .summarize(&transcript.text, &transcript.language_code)
            .await
            .map_err(|e| Error::Summarization(e.to_string()))?;

        Ok(VideoSummary {
            video_id: video_id.into(),
            transcript_excerpt: transcript.excerpt(),
            language: transcript.language_code,
            summary: summary.summary,
        })
    }

    /// Tries each preferred language in order and returns the first transcript found.
    ///
    /// Per-language failures and empty transcripts fall through to the next language.
    /// Failures that describe the whole video (captions disabled, video gone) end the search.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, Error> {
        for language in PREFERRED_LANGUAGES {
            match self
                .transcripts
                .fetch_transcript(video_id, language.code())
                .await
            {
                Ok(fetched) => {
                    let segments = fetched.segments.len();
                    let transcript = Transcript::from(fetched);
                    if transcript.text.is_empty() {
                        tracing::warn!(language = language.code(), segments, "Transcript is empty");
                        continue;
                    }

                    tracing::info!(language = language.code(), segments, "Fetched transcript");
                    return Ok(transcript);
                }
                Err(e) if e.is_video_level() => {
                    tracing::warn!(error = %e, "Transcript unavailable for video");
                    return Err(e.into());
                }
                Err(e) => {
                    tracing::warn!(error = %e, language = language.code(), "No transcript in language");
                }
            }
        }

        tracing::warn!("No transcript in any preferred language");
        Err(Error::TranscriptNotFound)
    }

    /// Synthesizes `text` with the voice for `language_code`
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn speak(&self, text: &str, language_code: &str) -> Result<Bytes, Error> {
        self.speech
            .synthesize(text, language_code)
            .await
            .map_err(|e| Error::Synthesis(e.to_string()))
    }
}

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use yt_digest::transcript::TranscriptProvider;
use yt_transcript::{FetchedTranscript, TranscriptError, TranscriptSegment};

#[derive(Clone, Copy)]
pub enum VideoFailure {
    Disabled,
    Unavailable,
}

#[derive(Clone, Default)]
pub struct MockTranscriptProvider {
    /// language code -> segment texts
    pub transcripts: HashMap<String, Vec<String>>,
    /// language codes requested, in order
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<VideoFailure>,
}

impl MockTranscriptProvider {
    pub fn with_transcript(mut self, language_code: &str, segments: &[&str]) -> Self {
        self.transcripts.insert(
            language_code.to_string(),
            segments.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn failing(failure: VideoFailure) -> Self {
        Self {
            fail_with: Some(failure),
            ..Default::default()
        }
    }
}

impl TranscriptProvider for MockTranscriptProvider {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        language_code: &str,
    ) -> Result<FetchedTranscript, TranscriptError> {
        self.calls.lock().unwrap().push(language_code.to_string());

        match self.fail_with {
            Some(VideoFailure::Disabled) => {
                return Err(TranscriptError::TranscriptsDisabled {
                    video_id: video_id.to_string(),
                })
            }
            Some(VideoFailure::Unavailable) => {
                return Err(TranscriptError::VideoUnavailable {
                    video_id: video_id.to_string(),
                })
            }
            None => {}
        }

        let Some(texts) = self.transcripts.get(language_code) else {
            return Err(TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                requested: vec![language_code.to_string()],
                available: self.transcripts.keys().cloned().collect(),
            });
        };

        Ok(FetchedTranscript {
            video_id: video_id.to_string(),
            language_code: language_code.to_string(),
            language: language_code.to_uppercase(),
            is_generated: false,
            segments: texts
                .iter()
                .enumerate()
                .map(|(i, text)| TranscriptSegment {
                    text: text.clone(),
                    start: i as f64,
                    duration: 1.0,
                })
                .collect(),
        })
    }
}

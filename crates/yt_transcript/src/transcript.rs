use itertools::Itertools;
use serde::Serialize;

use crate::{player::CaptionTrack, TranscriptError, TranscriptSegment};

/// A caption track advertised by the player, not yet downloaded
#[derive(Debug, Clone)]
pub struct TranscriptTrack {
    pub language_code: String,
    /// Display name, e.g. "English (auto-generated)"
    pub language: String,
    /// Speech-recognition captions as opposed to uploader-provided ones
    pub is_generated: bool,
    pub(crate) base_url: String,
}

impl From<CaptionTrack> for TranscriptTrack {
    fn from(track: CaptionTrack) -> Self {
        TranscriptTrack {
            language: track
                .name
                .as_ref()
                .map(|name| name.to_plain())
                .unwrap_or_else(|| track.language_code.clone()),
            is_generated: track.kind.as_deref() == Some("asr"),
            language_code: track.language_code,
            base_url: track.base_url,
        }
    }
}

impl TranscriptTrack {
    /// The timed text url in the plain xml format
    pub fn timed_text_url(&self) -> String {
        self.base_url.replace("&fmt=srv3", "")
    }
}

/// All caption tracks available for a video
#[derive(Debug, Clone)]
pub struct TranscriptList {
    pub video_id: String,
    pub tracks: Vec<TranscriptTrack>,
}

impl TranscriptList {
    /// Finds a track for the first matching language code, in priority order.
    ///
    /// Uploader-provided tracks win over generated ones for the same code.
    pub fn find_transcript(
        &self,
        language_codes: &[&str],
    ) -> Result<&TranscriptTrack, TranscriptError> {
        for code in language_codes {
            let found = self
                .tracks
                .iter()
                .filter(|t| t.language_code == *code)
                .min_by_key(|t| t.is_generated);

            if let Some(track) = found {
                return Ok(track);
            }
        }

        Err(TranscriptError::NoTranscriptFound {
            video_id: self.video_id.clone(),
            requested: language_codes.iter().map(|c| c.to_string()).collect(),
            available: self
                .tracks
                .iter()
                .map(|t| t.language_code.clone())
                .unique()
                .collect(),
        })
    }
}

/// A downloaded transcript
#[derive(Debug, Clone, Serialize)]
pub struct FetchedTranscript {
    pub video_id: String,
    pub language_code: String,
    pub language: String,
    pub is_generated: bool,
    pub segments: Vec<TranscriptSegment>,
}

impl FetchedTranscript {
    /// Segment texts joined by single spaces
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).join(" ")
    }
}

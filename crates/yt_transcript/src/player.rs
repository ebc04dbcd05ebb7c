//! # Player response
//!
//! Typed view of the innertube `/player` response, restricted to the parts needed
//! to decide whether a video can be captioned and which caption tracks exist.

use itertools::Itertools;
use serde::Deserialize;

use crate::{TranscriptError, TranscriptTrack};

const REASON_VIDEO_UNAVAILABLE: &str = "This video is unavailable";
const REASON_VIDEO_PRIVATE: &str = "This video is private";
const REASON_BOT_DETECTED: &str = "Sign in to confirm you’re not a bot";
const REASON_AGE_RESTRICTED: &str = "This video may be inappropriate for some users.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: Option<PlayabilityStatus>,
    pub captions: Option<Captions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayabilityStatus {
    pub status: String,
    pub reason: Option<String>,
    pub error_screen: Option<ErrorScreen>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorScreen {
    pub player_error_message_renderer: Option<PlayerErrorMessageRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerErrorMessageRenderer {
    pub subreason: Option<Text>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<CaptionTracklist>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTracklist {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    pub name: Option<Text>,
    pub kind: Option<String>,
}

/// YouTube renders text either as a single `simpleText` or as a list of `runs`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub simple_text: Option<String>,
    pub runs: Option<Vec<TextRun>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextRun {
    pub text: String,
}

impl Text {
    pub fn to_plain(&self) -> String {
        if let Some(simple_text) = &self.simple_text {
            return simple_text.clone();
        }
        self.runs
            .iter()
            .flatten()
            .map(|run| run.text.as_str())
            .join("")
    }
}

impl PlayerResponse {
    /// Fails unless the video is playable.
    pub fn assert_playable(&self, video_id: &str) -> Result<(), TranscriptError> {
        let Some(status) = &self.playability_status else {
            return Ok(());
        };
        if status.status == "OK" {
            return Ok(());
        }

        let reason = status.reason.clone().unwrap_or_default();

        match status.status.as_str() {
            "LOGIN_REQUIRED" if reason == REASON_BOT_DETECTED => {
                Err(TranscriptError::RequestBlocked { reason })
            }
            "LOGIN_REQUIRED" if reason == REASON_AGE_RESTRICTED => {
                Err(TranscriptError::AgeRestricted {
                    video_id: video_id.to_string(),
                })
            }
            "ERROR" if reason == REASON_VIDEO_UNAVAILABLE => {
                if video_id.starts_with("http://") || video_id.starts_with("https://") {
                    Err(TranscriptError::InvalidVideoId {
                        video_id: video_id.to_string(),
                    })
                } else {
                    Err(TranscriptError::VideoUnavailable {
                        video_id: video_id.to_string(),
                    })
                }
            }
            _ if reason == REASON_VIDEO_PRIVATE => Err(TranscriptError::VideoUnavailable {
                video_id: video_id.to_string(),
            }),
            _ => {
                let subreason = status
                    .error_screen
                    .as_ref()
                    .and_then(|screen| screen.player_error_message_renderer.as_ref())
                    .and_then(|renderer| renderer.subreason.as_ref())
                    .map(Text::to_plain)
                    .filter(|s| !s.is_empty());

                let reason = match subreason {
                    Some(subreason) => format!("{reason} ({subreason})"),
                    None => reason,
                };

                Err(TranscriptError::VideoUnplayable {
                    video_id: video_id.to_string(),
                    reason,
                })
            }
        }
    }

    /// Consumes the response into the list of caption tracks.
    ///
    /// A response without a caption tracklist means the uploader disabled captions.
    pub fn into_tracks(self, video_id: &str) -> Result<Vec<TranscriptTrack>, TranscriptError> {
        let tracks = self
            .captions
            .and_then(|c| c.player_captions_tracklist_renderer)
            .map(|renderer| renderer.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(TranscriptError::TranscriptsDisabled {
                video_id: video_id.to_string(),
            });
        }

        Ok(tracks.into_iter().map(TranscriptTrack::from).collect())
    }
}

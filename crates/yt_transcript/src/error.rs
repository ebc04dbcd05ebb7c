#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("YouTube responded with status {status} for {url}")]
    Http { status: u16, url: String },
    #[error("Too many requests sent to YouTube")]
    TooManyRequests,
    #[error("YouTube is blocking requests from this IP (captcha required)")]
    IpBlocked,
    #[error("YouTube is blocking requests from this IP: {reason}")]
    RequestBlocked { reason: String },
    #[error("Invalid video id '{video_id}': pass the video id, not the url")]
    InvalidVideoId { video_id: String },
    #[error("Video {video_id} is unavailable")]
    VideoUnavailable { video_id: String },
    #[error("Video {video_id} is age restricted")]
    AgeRestricted { video_id: String },
    #[error("Video {video_id} is unplayable: {reason}")]
    VideoUnplayable { video_id: String, reason: String },
    #[error("Transcripts are disabled for video {video_id}")]
    TranscriptsDisabled { video_id: String },
    #[error("No transcript found for video {video_id} in {requested:?} (available: {available:?})")]
    NoTranscriptFound {
        video_id: String,
        requested: Vec<String>,
        available: Vec<String>,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Timed text error: {0}")]
    TimedText(#[from] quick_xml::Error),
    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

impl TranscriptError {
    /// Whether the error describes the whole video rather than a single
    /// caption language. Trying another language cannot succeed after one of these.
    pub fn is_video_level(&self) -> bool {
        matches!(
            self,
            Self::TranscriptsDisabled { .. }
                | Self::VideoUnavailable { .. }
                | Self::VideoUnplayable { .. }
                | Self::AgeRestricted { .. }
        )
    }
}

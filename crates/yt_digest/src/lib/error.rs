use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use yt_transcript::TranscriptError;

/// Every failure the HTTP surface can report, one status per variant
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid YouTube URL.")]
    InvalidUrl,
    #[error("Transcript not found.")]
    TranscriptNotFound,
    #[error("Transcripts are disabled for this video.")]
    TranscriptsDisabled,
    #[error("Video is unavailable.")]
    VideoUnavailable,
    #[error("OpenAI API Error: {0}")]
    Summarization(String),
    #[error("TTS failed: {0}")]
    Synthesis(String),
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::InvalidUrl => StatusCode::BAD_REQUEST,
            Error::TranscriptNotFound => StatusCode::NOT_FOUND,
            Error::TranscriptsDisabled => StatusCode::FORBIDDEN,
            Error::VideoUnavailable => StatusCode::GONE,
            Error::Summarization(_) => StatusCode::BAD_GATEWAY,
            Error::Synthesis(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl From<TranscriptError> for Error {
    fn from(e: TranscriptError) -> Self {
        match e {
            TranscriptError::TranscriptsDisabled { .. } => Error::TranscriptsDisabled,
            TranscriptError::VideoUnavailable { .. }
            | TranscriptError::VideoUnplayable { .. }
            | TranscriptError::AgeRestricted { .. } => Error::VideoUnavailable,
            _ => Error::TranscriptNotFound,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Error::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

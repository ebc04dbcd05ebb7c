//! HTTP surface.
//!
//! Both endpoints answer errors with `{"detail": "..."}` and the status of the
//! [`Error`] variant, including the audio endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    digest::{DigestService, VideoSummary},
    error::Error,
    transcript::TranscriptProvider,
    SpeechSynthesizer, Summarizer,
};

type SharedService<P, S, V> = Arc<DigestService<P, S, V>>;

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub youtube_url: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    pub language: String,
}

pub fn router<P, S, V>(service: SharedService<P, S, V>) -> Router
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    Router::new()
        .route("/api/summarize", post(summarize::<P, S, V>))
        .route("/api/speak-line", post(speak_line::<P, S, V>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(service)
}

async fn summarize<P, S, V>(
    State(service): State<SharedService<P, S, V>>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Result<Json<VideoSummary>, Error>
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let summary = service.summarize_video(&req.youtube_url).await?;
    Ok(Json(summary))
}

async fn speak_line<P, S, V>(
    State(service): State<SharedService<P, S, V>>,
    payload: Result<Json<SpeakRequest>, JsonRejection>,
) -> Result<impl IntoResponse, Error>
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let audio = service
        .speak(&req.text, &req.language)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Speech synthesis failed"))?;

    Ok(([(header::CONTENT_TYPE, V::CONTENT_TYPE)], audio))
}

use reqwest::{header, Client, Response, StatusCode};

use crate::{
    player::PlayerResponse, timedtext::parse_timed_text, watch_page::WatchPage,
    FetchedTranscript, TranscriptError, TranscriptList, TranscriptTrack,
};

/// Fetches caption transcripts for YouTube videos.
///
/// Every call goes to YouTube; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct YouTubeTranscriptApi {
    client: Client,
    base_url: String,
}

impl Default for YouTubeTranscriptApi {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl YouTubeTranscriptApi {
    const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
    const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
    const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Lists the caption tracks of a video
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, video_id: &str) -> Result<TranscriptList, TranscriptError> {
        let page = self.fetch_watch_page(video_id).await?;
        let api_key = page.innertube_api_key()?;

        let player = self.fetch_player_response(video_id, api_key).await?;
        player.assert_playable(video_id)?;

        Ok(TranscriptList {
            video_id: video_id.to_string(),
            tracks: player.into_tracks(video_id)?,
        })
    }

    /// Fetches the transcript of the first available language in `language_codes`
    #[tracing::instrument(skip(self))]
    pub async fn fetch(
        &self,
        video_id: &str,
        language_codes: &[&str],
    ) -> Result<FetchedTranscript, TranscriptError> {
        let list = self.list(video_id).await?;
        let track = list.find_transcript(language_codes)?;
        self.fetch_track(video_id, track).await
    }

    /// Downloads and parses the timed text of a single track
    #[tracing::instrument(skip(self, track), fields(language_code = %track.language_code))]
    pub async fn fetch_track(
        &self,
        video_id: &str,
        track: &TranscriptTrack,
    ) -> Result<FetchedTranscript, TranscriptError> {
        let resp = self
            .client
            .get(track.timed_text_url())
            .header(header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let xml = check_status(resp)?.text().await?;
        let segments = parse_timed_text(&xml)?;

        Ok(FetchedTranscript {
            video_id: video_id.to_string(),
            language_code: track.language_code.clone(),
            language: track.language.clone(),
            is_generated: track.is_generated,
            segments,
        })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<WatchPage, TranscriptError> {
        let page = self.get_watch_html(video_id, None).await?;

        // EU visitors get a consent interstitial first; accept it and retry once
        match page.consent_cookie() {
            None => Ok(page),
            Some(cookie) => {
                let cookie = cookie?;
                let page = self.get_watch_html(video_id, Some(&cookie)).await?;
                if page.consent_cookie().is_some() {
                    return Err(TranscriptError::ParseError(
                        "Failed to accept the YouTube consent form",
                    ));
                }
                Ok(page)
            }
        }
    }

    async fn get_watch_html(
        &self,
        video_id: &str,
        cookie: Option<&str>,
    ) -> Result<WatchPage, TranscriptError> {
        let mut req = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id)])
            .header(header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE);

        if let Some(cookie) = cookie {
            req = req.header(header::COOKIE, cookie);
        }

        let resp = req
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let html = check_status(resp)?.text().await?;
        Ok(WatchPage::new(html))
    }

    async fn fetch_player_response(
        &self,
        video_id: &str,
        api_key: &str,
    ) -> Result<PlayerResponse, TranscriptError> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": Self::INNERTUBE_CLIENT_NAME,
                    "clientVersion": Self::INNERTUBE_CLIENT_VERSION
                }
            },
            "videoId": video_id
        });

        let resp = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .query(&[("key", api_key)])
            .header(header::ACCEPT_LANGUAGE, Self::ACCEPT_LANGUAGE)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        let text = check_status(resp)?.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn check_status(resp: Response) -> Result<Response, TranscriptError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TranscriptError::TooManyRequests);
    }

    Err(TranscriptError::Http {
        status: status.as_u16(),
        url: resp.url().to_string(),
    })
}

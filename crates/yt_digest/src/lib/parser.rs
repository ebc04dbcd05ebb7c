//! # Url parser
//!
//! Pulls the video id out of the common YouTube url shapes
//! (`watch?v=<id>`, `youtu.be/<id>`, and anything else carrying `v=<id>`).

use std::{fmt, ops::Deref, sync::LazyLock};

use regex::Regex;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|youtu\.be/)([a-zA-Z0-9_-]{11})").unwrap());

/// An 11 character YouTube video id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl Deref for VideoId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<VideoId> for String {
    fn from(value: VideoId) -> Self {
        value.0
    }
}

/// Extracts the video id from `url`.
///
/// # Returns
/// * `Some(VideoId)` holding exactly the 11 characters following the first `v=` or `youtu.be/`.
/// * `None` if the url carries no such id.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}

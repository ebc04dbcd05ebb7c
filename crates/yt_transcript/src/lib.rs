//! # YouTube transcripts
//!
//! Retrieves the caption tracks of a YouTube video the way the web player does:
//! the watch page yields an innertube api key, the innertube `/player` endpoint
//! lists the caption tracks, and each track's timed text xml holds the segments.

mod client;
mod error;
pub mod player;
mod timedtext;
mod transcript;
mod watch_page;

pub use client::YouTubeTranscriptApi;
pub use error::TranscriptError;
pub use timedtext::{parse_timed_text, TranscriptSegment};
pub use transcript::{FetchedTranscript, TranscriptList, TranscriptTrack};
pub use watch_page::WatchPage;

use std::{borrow::Cow, sync::LazyLock};

use quick_xml::{
    events::{BytesStart, Event},
    Reader,
};
use regex::Regex;
use serde::Serialize;

use crate::TranscriptError;

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A single timed caption line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub text: String,
    /// Offset from the start of the video, in seconds
    pub start: f64,
    /// Seconds the line stays on screen
    pub duration: f64,
}

/// Parses a `/api/timedtext` xml document into caption segments.
///
/// Segment text is unescaped twice (YouTube escapes entities inside the xml
/// payload) and stripped of inline markup. Empty lines are dropped.
pub fn parse_timed_text(xml: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut segments = Vec::new();
    let mut current: Option<(f64, f64, String)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"text" => {
                let start = attr_seconds(&e, "start")?;
                let duration = attr_seconds(&e, "dur")?;
                current = Some((start, duration, String::new()));
            }
            Event::Text(e) => {
                if let Some((_, _, text)) = current.as_mut() {
                    text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some((_, _, text)) = current.as_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(e) if e.name().as_ref() == b"text" => {
                if let Some((start, duration, raw)) = current.take() {
                    let text = clean_text(&raw);
                    if !text.is_empty() {
                        segments.push(TranscriptSegment {
                            text,
                            start,
                            duration,
                        });
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(segments)
}

fn attr_seconds(e: &BytesStart, name: &str) -> Result<f64, TranscriptError> {
    let seconds = match e
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?
    {
        Some(attr) => attr.unescape_value()?.trim().parse::<f64>().unwrap_or(0.0),
        None => 0.0,
    };
    Ok(seconds)
}

fn clean_text(raw: &str) -> String {
    // html entities that survived the xml pass (e.g. `&amp;#39;` -> `&#39;`)
    let unescaped = quick_xml::escape::unescape(raw).unwrap_or(Cow::Borrowed(raw));
    HTML_TAG_RE.replace_all(&unescaped, "").trim().to_string()
}

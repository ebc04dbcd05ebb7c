use std::{ops::Deref, sync::LazyLock};

use regex::Regex;

use crate::TranscriptError;

static INNERTUBE_API_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).unwrap()
});

static CONSENT_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name="v" value="(.*?)""#).unwrap());

const CONSENT_FORM_MARKER: &str = r#"action="https://consent.youtube.com/s""#;
const RECAPTCHA_MARKER: &str = r#"class="g-recaptcha""#;

/// Raw html of a `youtube.com/watch` page
pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// Extracts the innertube api key needed to query the player endpoint.
    ///
    /// A page without a key but with a captcha means the caller's IP has been flagged.
    pub fn innertube_api_key(&self) -> Result<&str, TranscriptError> {
        if let Some(key) = INNERTUBE_API_KEY_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str())
        {
            return Ok(key);
        }

        if self.contains(RECAPTCHA_MARKER) {
            return Err(TranscriptError::IpBlocked);
        }

        Err(TranscriptError::ParseError(
            "Failed to extract INNERTUBE_API_KEY from the watch page",
        ))
    }

    /// Returns the value for the `CONSENT` cookie when YouTube served its EU consent
    /// interstitial instead of the watch page.
    pub fn consent_cookie(&self) -> Option<Result<String, TranscriptError>> {
        if !self.contains(CONSENT_FORM_MARKER) {
            return None;
        }

        let cookie = CONSENT_VALUE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .map(|m| format!("CONSENT=YES+{}", m.as_str()))
            .ok_or(TranscriptError::ParseError(
                "Failed to read the consent form value",
            ));
        Some(cookie)
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

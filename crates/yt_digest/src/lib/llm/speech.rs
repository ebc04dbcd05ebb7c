use std::{fmt::Display, future::Future};

use bytes::Bytes;

pub trait SpeechSynthesizer {
    const CONTENT_TYPE: &'static str = "audio/mpeg";

    type Error: Display;

    /// Reads `text` aloud with the voice mapped to `language_code`, returning encoded audio
    fn synthesize(
        &self,
        text: &str,
        language_code: &str,
    ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send;
}

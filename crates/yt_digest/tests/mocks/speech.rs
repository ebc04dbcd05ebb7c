use bytes::Bytes;
use std::sync::{Arc, Mutex};
use yt_digest::SpeechSynthesizer;

#[derive(Clone)]
pub struct MockSpeech {
    pub audio: Bytes,
    /// (text, language_code) per call
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockSpeech {
    pub fn new(audio: &'static [u8]) -> Self {
        Self {
            audio: Bytes::from_static(audio),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            audio: Bytes::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl SpeechSynthesizer for MockSpeech {
    type Error = anyhow::Error;

    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), language_code.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(self.audio.clone())
    }
}

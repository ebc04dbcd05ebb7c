use crate::{digest::DigestService, transcript::TranscriptProvider, SpeechSynthesizer, Summarizer};

pub struct DigestServiceBuilder<P = (), S = (), V = ()> {
    transcripts: P,
    summarizer: S,
    speech: V,
}

impl DigestServiceBuilder {
    pub fn new() -> Self {
        Self {
            transcripts: (),
            summarizer: (),
            speech: (),
        }
    }
}

impl Default for DigestServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, V> DigestServiceBuilder<P, S, V> {
    pub fn transcripts<P2: TranscriptProvider + Send + Sync + 'static>(
        self,
        transcripts: P2,
    ) -> DigestServiceBuilder<P2, S, V> {
        DigestServiceBuilder {
            transcripts,
            summarizer: self.summarizer,
            speech: self.speech,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> DigestServiceBuilder<P, S2, V> {
        DigestServiceBuilder {
            transcripts: self.transcripts,
            summarizer,
            speech: self.speech,
        }
    }

    pub fn speech<V2: SpeechSynthesizer + Send + Sync + 'static>(
        self,
        speech: V2,
    ) -> DigestServiceBuilder<P, S, V2> {
        DigestServiceBuilder {
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            speech,
        }
    }
}

impl<P, S, V> DigestServiceBuilder<P, S, V>
where
    P: TranscriptProvider + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    V: SpeechSynthesizer + Send + Sync + 'static,
{
    pub fn build(self) -> DigestService<P, S, V> {
        DigestService::new(self.transcripts, self.summarizer, self.speech)
    }
}

mod mocks;

use mocks::{
    speech::MockSpeech,
    summarizer::MockSummarizer,
    transcripts::{MockTranscriptProvider, VideoFailure},
};
use yt_digest::{
    transcript::MAX_TRANSCRIPT_CHARS, DigestService, DigestServiceBuilder, Error,
};

const URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn build_service(
    transcripts: MockTranscriptProvider,
    summarizer: MockSummarizer,
    speech: MockSpeech,
) -> DigestService<MockTranscriptProvider, MockSummarizer, MockSpeech> {
    DigestServiceBuilder::new()
        .transcripts(transcripts)
        .summarizer(summarizer)
        .speech(speech)
        .build()
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_english_only_video_falls_back_to_english() {
    let transcripts =
        MockTranscriptProvider::default().with_transcript("en", &["Never gonna", "give you up"]);
    let summarizer = MockSummarizer::new("- a song about commitment");

    let transcript_calls = transcripts.calls.clone();
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let summary = service
        .summarize_video(URL)
        .await
        .expect("summary should succeed");

    assert_eq!(summary.video_id, "dQw4w9WgXcQ");
    assert_eq!(summary.language, "en");
    assert_eq!(summary.summary, "- a song about commitment");
    assert_eq!(summary.transcript_excerpt, "Never gonna give you up...");

    assert_eq!(
        *transcript_calls.lock().unwrap(),
        vec!["mr".to_string(), "hi".to_string(), "en".to_string()],
        "Marathi and Hindi should be tried before English"
    );

    let summarizer_calls = summarizer_calls.lock().unwrap();
    assert_eq!(summarizer_calls.len(), 1);
    assert_eq!(
        summarizer_calls[0],
        ("Never gonna give you up".to_string(), "en".to_string())
    );
}

#[tokio::test]
async fn test_first_preferred_language_wins() {
    let transcripts = MockTranscriptProvider::default()
        .with_transcript("en", &["english text"])
        .with_transcript("hi", &["हिंदी पाठ"]);
    let summarizer = MockSummarizer::new("सारांश");

    let transcript_calls = transcripts.calls.clone();
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let summary = service.summarize_video(URL).await.unwrap();

    assert_eq!(summary.language, "hi");
    assert_eq!(
        *transcript_calls.lock().unwrap(),
        vec!["mr".to_string(), "hi".to_string()],
        "English should never be requested once Hindi succeeded"
    );
    assert_eq!(summarizer_calls.lock().unwrap()[0].1, "hi");
}

#[tokio::test]
async fn test_marathi_is_preferred_over_everything() {
    let transcripts = MockTranscriptProvider::default()
        .with_transcript("en", &["english"])
        .with_transcript("hi", &["hindi"])
        .with_transcript("mr", &["मराठी"]);

    let service = build_service(
        transcripts,
        MockSummarizer::new("summary"),
        MockSpeech::new(b"mp3"),
    );
    let summary = service.summarize_video("https://youtu.be/dQw4w9WgXcQ").await.unwrap();

    assert_eq!(summary.language, "mr");
    assert_eq!(summary.transcript_excerpt, "मराठी...");
}

// ─── Truncation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_long_transcript_is_truncated() {
    let long_text = "x".repeat(20_000);
    let transcripts = MockTranscriptProvider::default().with_transcript("en", &[long_text.as_str()]);
    let summarizer = MockSummarizer::new("summary");
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let summary = service.summarize_video(URL).await.unwrap();

    let summarizer_calls = summarizer_calls.lock().unwrap();
    let sent = &summarizer_calls[0].0;
    assert_eq!(sent.chars().count(), MAX_TRANSCRIPT_CHARS);
    assert_eq!(sent.as_str(), &long_text[..MAX_TRANSCRIPT_CHARS]);

    assert_eq!(summary.transcript_excerpt, format!("{}...", "x".repeat(300)));
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_url_never_reaches_provider() {
    let transcripts = MockTranscriptProvider::default().with_transcript("en", &["text"]);
    let transcript_calls = transcripts.calls.clone();

    let service = build_service(
        transcripts,
        MockSummarizer::new("summary"),
        MockSpeech::new(b"mp3"),
    );
    let result = service
        .summarize_video("https://vimeo.com/123456")
        .await;

    assert!(matches!(result, Err(Error::InvalidUrl)));
    assert!(transcript_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_no_transcript_in_any_language() {
    let transcripts = MockTranscriptProvider::default().with_transcript("de", &["deutsch"]);
    let transcript_calls = transcripts.calls.clone();
    let summarizer = MockSummarizer::new("summary");
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let result = service.summarize_video(URL).await;

    assert!(matches!(result, Err(Error::TranscriptNotFound)));
    assert_eq!(transcript_calls.lock().unwrap().len(), 3);
    assert!(summarizer_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_transcripts_fall_through_to_next_language() {
    let transcripts = MockTranscriptProvider::default()
        .with_transcript("mr", &[])
        .with_transcript("hi", &["  ", ""])
        .with_transcript("en", &["spoken words"]);
    let transcript_calls = transcripts.calls.clone();
    let summarizer = MockSummarizer::new("summary");
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let summary = service.summarize_video(URL).await.unwrap();

    assert_eq!(summary.language, "en");
    assert_eq!(transcript_calls.lock().unwrap().len(), 3);
    assert_eq!(
        *summarizer_calls.lock().unwrap(),
        vec![("spoken words".to_string(), "en".to_string())]
    );
}

#[tokio::test]
async fn test_only_empty_transcripts_is_not_found() {
    let transcripts = MockTranscriptProvider::default().with_transcript("mr", &[]);
    let summarizer = MockSummarizer::new("hallucinated");
    let summarizer_calls = summarizer.calls.clone();

    let service = build_service(transcripts, summarizer, MockSpeech::new(b"mp3"));
    let result = service.summarize_video(URL).await;

    assert!(matches!(result, Err(Error::TranscriptNotFound)));
    assert!(
        summarizer_calls.lock().unwrap().is_empty(),
        "An empty transcript must never be summarized"
    );
}

#[tokio::test]
async fn test_disabled_transcripts_stop_the_search() {
    let transcripts = MockTranscriptProvider::failing(VideoFailure::Disabled);
    let transcript_calls = transcripts.calls.clone();

    let service = build_service(
        transcripts,
        MockSummarizer::new("summary"),
        MockSpeech::new(b"mp3"),
    );
    let result = service.summarize_video(URL).await;

    assert!(matches!(result, Err(Error::TranscriptsDisabled)));
    assert_eq!(*transcript_calls.lock().unwrap(), vec!["mr".to_string()]);
}

#[tokio::test]
async fn test_unavailable_video() {
    let service = build_service(
        MockTranscriptProvider::failing(VideoFailure::Unavailable),
        MockSummarizer::new("summary"),
        MockSpeech::new(b"mp3"),
    );
    let result = service.summarize_video(URL).await;

    assert!(matches!(result, Err(Error::VideoUnavailable)));
}

#[tokio::test]
async fn test_summarizer_failure_is_upstream_error() {
    let transcripts = MockTranscriptProvider::default().with_transcript("en", &["text"]);

    let service = build_service(
        transcripts,
        MockSummarizer::failing("rate limit exceeded"),
        MockSpeech::new(b"mp3"),
    );
    let result = service.summarize_video(URL).await;

    match result {
        Err(Error::Summarization(msg)) => assert!(msg.contains("rate limit exceeded")),
        other => panic!("Expected Summarization error, got {other:?}"),
    }
}

// ─── Speech ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_speak_returns_audio_untouched() {
    let speech = MockSpeech::new(b"ID3\x04\x00fake-mpeg-frames");
    let speech_calls = speech.calls.clone();

    let service = build_service(
        MockTranscriptProvider::default(),
        MockSummarizer::new("summary"),
        speech,
    );
    let audio = service.speak("नमस्कार", "mr").await.unwrap();

    assert_eq!(&audio[..], b"ID3\x04\x00fake-mpeg-frames");
    assert_eq!(
        *speech_calls.lock().unwrap(),
        vec![("नमस्कार".to_string(), "mr".to_string())]
    );
}

#[tokio::test]
async fn test_speak_does_not_truncate_long_text() {
    let speech = MockSpeech::new(b"mp3");
    let speech_calls = speech.calls.clone();

    let service = build_service(
        MockTranscriptProvider::default(),
        MockSummarizer::new("summary"),
        speech,
    );
    let text = "y".repeat(20_000);
    service.speak(&text, "en").await.unwrap();

    assert_eq!(speech_calls.lock().unwrap()[0].0.len(), 20_000);
}

#[tokio::test]
async fn test_speak_failure_is_synthesis_error() {
    let service = build_service(
        MockTranscriptProvider::default(),
        MockSummarizer::new("summary"),
        MockSpeech::failing("deployment not found"),
    );
    let result = service.speak("hello", "en").await;

    match result {
        Err(Error::Synthesis(msg)) => assert!(msg.contains("deployment not found")),
        other => panic!("Expected Synthesis error, got {other:?}"),
    }
}

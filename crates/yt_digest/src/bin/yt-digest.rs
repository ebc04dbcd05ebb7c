use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use yt_transcript::YouTubeTranscriptApi;

use yt_digest::{
    config::{AzureDeployment, Cli},
    openai::AzureOpenAIClient,
    server,
    tracing::init_tracing_subscriber,
    DigestServiceBuilder,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let summarizer = AzureOpenAIClient::new(AzureDeployment::from(cli.chat));
    let speech = AzureOpenAIClient::new(AzureDeployment::from(cli.speech));

    let service = DigestServiceBuilder::new()
        .transcripts(YouTubeTranscriptApi::default())
        .summarizer(summarizer)
        .speech(speech)
        .build();

    let app = server::router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(cli.listen)
        .await
        .with_context(|| format!("Failed to bind {}", cli.listen))?;
    tracing::info!(addr = %cli.listen, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}

use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::AzureDeployment,
    language::{voice_for, Voice},
    llm::summarizer::system_prompt,
    SpeechSynthesizer, Summarizer, SummaryResponse,
};

/// Client bound to a single Azure OpenAI deployment.
///
/// The chat and speech deployments are separate resources, so each gets its own client.
#[derive(Debug, Clone)]
pub struct AzureOpenAIClient {
    client: Client,
    deployment: AzureDeployment,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in response")]
    EmptyResponse,
}

impl AzureOpenAIClient {
    pub fn new(deployment: AzureDeployment) -> Self {
        Self {
            client: Client::new(),
            deployment,
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn deployment_name(&self) -> &str {
        &self.deployment.name
    }

    fn deployment_url(&self, operation: &str) -> String {
        format!(
            "{}/openai/deployments/{}/{operation}",
            self.deployment.endpoint.trim_end_matches('/'),
            self.deployment.name
        )
    }

    async fn post_json(
        &self,
        operation: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, OpenAIError> {
        let resp = self
            .client
            .post(self.deployment_url(operation))
            .query(&[("api-version", &self.deployment.api_version)])
            .header("api-key", &self.deployment.api_key)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp)
    }

    pub async fn send_completion_request(
        &self,
        system_prompt: &str,
        user_content: &str,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": self.deployment.name,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_content
                }
            ],
            "temperature": <Self as Summarizer>::TEMPERATURE,
            "top_p": <Self as Summarizer>::TOP_P,
            "max_tokens": <Self as Summarizer>::MAX_TOKENS
        });

        let resp = self.post_json("chat/completions", &body).await?;

        Ok(resp.json::<CompletionResponse>().await?)
    }

    pub async fn send_speech_request(
        &self,
        voice: Voice,
        input: &str,
    ) -> Result<Bytes, OpenAIError> {
        let body = serde_json::json!({
            "model": self.deployment.name,
            "voice": voice,
            "input": input
        });

        let resp = self.post_json("audio/speech", &body).await?;

        Ok(resp.bytes().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for AzureOpenAIClient {
    type Error = OpenAIError;

    async fn summarize(
        &self,
        transcript: &str,
        language_code: &str,
    ) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_completion_request(system_prompt(language_code), transcript)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(|content| content.trim().to_string())
            .ok_or(OpenAIError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}

impl SpeechSynthesizer for AzureOpenAIClient {
    type Error = OpenAIError;

    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Bytes, Self::Error> {
        let voice = voice_for(language_code);
        tracing::debug!(voice = voice.as_str(), chars = text.chars().count(), "Synthesizing speech");

        self.send_speech_request(voice, text)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))
    }
}

use std::net::SocketAddr;

use clap::{Args, Parser};

/// Connection details of one Azure OpenAI deployment
#[derive(Debug, Clone)]
pub struct AzureDeployment {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    pub api_key: String,
    /// Deployment name, also sent as the model name
    pub name: String,
    pub api_version: String,
}

#[derive(Debug, Args)]
pub struct ChatDeploymentArgs {
    /// Azure OpenAI key for the summarization deployment
    #[arg(long, env = "AZURE_API_KEY", hide_env_values = true)]
    pub azure_api_key: String,

    /// Azure OpenAI endpoint for the summarization deployment
    #[arg(long, env = "AZURE_ENDPOINT")]
    pub azure_endpoint: String,

    /// Chat completion deployment name
    #[arg(long, env = "AZURE_DEPLOYMENT_NAME")]
    pub azure_deployment_name: String,

    /// API version for the summarization deployment
    #[arg(long, env = "AZURE_API_VERSION")]
    pub azure_api_version: String,
}

#[derive(Debug, Args)]
pub struct SpeechDeploymentArgs {
    /// Azure OpenAI key for the text-to-speech deployment
    #[arg(long, env = "AZURE_TTS_API_KEY", hide_env_values = true)]
    pub azure_tts_api_key: String,

    /// Azure OpenAI endpoint for the text-to-speech deployment
    #[arg(long, env = "AZURE_TTS_API_BASE")]
    pub azure_tts_api_base: String,

    /// API version for the text-to-speech deployment
    #[arg(long, env = "AZURE_TTS_API_VERSION")]
    pub azure_tts_api_version: String,

    /// Text-to-speech deployment name
    #[arg(long, env = "AZURE_TTS_DEPLOYMENT")]
    pub azure_tts_deployment: String,
}

impl From<ChatDeploymentArgs> for AzureDeployment {
    fn from(args: ChatDeploymentArgs) -> Self {
        AzureDeployment {
            endpoint: args.azure_endpoint,
            api_key: args.azure_api_key,
            name: args.azure_deployment_name,
            api_version: args.azure_api_version,
        }
    }
}

impl From<SpeechDeploymentArgs> for AzureDeployment {
    fn from(args: SpeechDeploymentArgs) -> Self {
        AzureDeployment {
            endpoint: args.azure_tts_api_base,
            api_key: args.azure_tts_api_key,
            name: args.azure_tts_deployment,
            api_version: args.azure_tts_api_version,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "yt-digest",
    about = "Summarizes YouTube videos and reads summaries aloud"
)]
pub struct Cli {
    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    #[command(flatten)]
    pub chat: ChatDeploymentArgs,

    #[command(flatten)]
    pub speech: SpeechDeploymentArgs,
}

use anyhow::{Context, Result};
use futures_util::Stream;
use reqwest::Client;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;

use super::sse_parser::sse_to_text_stream;
use crate::session::Message;

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.8;

/// A lazy, finite, non-restartable sequence of reply fragments.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Anything that can open a streaming chat completion for a transcript snapshot.
pub trait CompletionSource {
    /// Starts a completion over `messages` and returns its fragment stream.
    fn open_stream(
        &self,
        messages: Vec<Message>,
    ) -> impl Future<Output = Result<TextStream>> + Send;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    temperature: f64,
}

/// HTTP client for an OpenAI-compatible `/v1/chat/completions` endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl CompletionClient {
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }

    pub async fn chat_stream(&self, messages: &[Message]) -> Result<TextStream> {
        let url = self.url();

        let chat_request = ChatCompletionRequest {
            model: &self.model,
            messages,
            stream: true,
            temperature: TEMPERATURE,
        };

        tracing::debug!(
            %url,
            model = %self.model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with status {status}: {body}");
        }

        Ok(Box::pin(sse_to_text_stream(response.bytes_stream())))
    }
}

impl CompletionSource for CompletionClient {
    async fn open_stream(&self, messages: Vec<Message>) -> Result<TextStream> {
        self.chat_stream(&messages).await
    }
}

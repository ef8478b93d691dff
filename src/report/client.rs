//! src/report/client.rs

use crate::report::{Prompt, ReportError};
use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Client of the OpenAI compatible chat completion gateway that writes reports.
pub struct ReportClient {
    http_client: Client,
    base_url: String,
    api_key: Option<Secret<String>>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(serde::Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(serde::Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(serde::Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ReportClient {
    pub fn new(
        base_url: String,
        api_key: Option<Secret<String>>,
        model: String,
        temperature: f32,
        max_tokens: u32,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url,
            api_key,
            model,
            temperature,
            max_tokens,
        }
    }

    /// Send one chat completion request and return the generated text.
    ///
    /// Single attempt: no retry, no streaming.
    #[tracing::instrument(
        name = "Request report from gateway",
        skip_all,
        fields(model = %self.model)
    )]
    pub async fn generate(&self, prompt: &Prompt) -> Result<String, ReportError> {
        let api_key = self
            .api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(ReportError::MissingApiKey)?;
        let url = format!("{}/v1/chat/completions", self.base_url);
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .context("Failed to reach the report gateway.")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                body = %error_text,
                "Report gateway answered with an error"
            );
            return Err(ReportError::Gateway(status));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .context("Failed to parse the report gateway response.")?;
        let report = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .context("Report gateway returned no choices.")?;
        Ok(report)
    }
}

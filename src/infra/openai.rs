use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::REQUEST_TIMEOUT;
use crate::domain::provider::Provider;
use crate::error::{AppError, AppResult};
use crate::services::ChatCompletionService;

/// Client for any endpoint implementing the OpenAI `/v1/chat/completions`
/// shape. The provider fixes the endpoint URL and model; wire types stay
/// private to this module.
pub struct OpenAiCompatClient {
    http: Client,
    provider: Provider,
    api_key: String,
}

impl OpenAiCompatClient {
    pub fn new(provider: Provider, api_key: String) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                AppError::Configuration(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http,
            provider,
            api_key,
        })
    }
}

#[async_trait]
impl ChatCompletionService for OpenAiCompatClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let request_body = ChatCompletionRequest::user_prompt(self.provider.model(), prompt);

        debug!(
            endpoint = self.provider.endpoint(),
            model = self.provider.model(),
            prompt_len = prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(self.provider.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::LanguageModel(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::LanguageModel(format!(
                "provider responded with {status}: {body}"
            )));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse provider response: {err}"))
        })?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::LanguageModel("empty or missing content in response".to_string())
            })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
}

impl ChatCompletionRequest {
    fn user_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![Message {
                role: "user",
                content: prompt.to_string(),
            }],
            // Pinned to 0 for deterministic-leaning classification output.
            temperature: 0.0,
        }
    }
}

#[derive(Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_shape() {
        let request = ChatCompletionRequest::user_prompt("gpt-3.5-turbo", "Classify this.");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Classify this."}],
                "temperature": 0.0,
            })
        );
    }

    #[test]
    fn parses_response_envelope() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hello"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2}
        }"#;
        let payload: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        let content = payload.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content.as_deref(), Some("hello"));
    }

    #[test]
    fn tolerates_missing_content_field() {
        let body = r#"{"choices": [{"message": {"role": "assistant"}}]}"#;
        let payload: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert!(payload.choices[0].message.content.is_none());
    }
}

//! OpenAI-compatible chat-completion client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ChatMessage, CompletionOptions, LlmClient, LlmError};

/// Client for an OpenAI-style `/chat/completions` endpoint with bearer auth.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenAiClient {
    pub fn new(api_key: String, endpoint: impl Into<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        options: CompletionOptions,
    ) -> Result<String, LlmError> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        let payload = CompletionRequest {
            model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
        };

        info!(
            endpoint = self.endpoint.as_str(),
            model,
            messages = messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|source| LlmError::Request {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                endpoint: self.endpoint.clone(),
                status,
                body,
            });
        }

        let body = response.bytes().await.map_err(|source| LlmError::Request {
            endpoint: self.endpoint.clone(),
            source,
        })?;
        let completion: CompletionResponse =
            serde_json::from_slice(&body).map_err(|source| LlmError::Decode {
                endpoint: self.endpoint.clone(),
                source,
            })?;
        debug!(choices = completion.choices.len(), "Received chat completion");

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .map(|content| content.trim().to_string())
            .ok_or(LlmError::EmptyResponse)
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f64,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: Option<CompletionMessage>,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn options() -> CompletionOptions {
        CompletionOptions {
            temperature: 0.7,
            max_tokens: 4000,
        }
    }

    #[tokio::test]
    async fn sends_bearer_and_reads_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 4000,
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "  Готово  \n"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(
            "sk-test".to_string(),
            format!("{}/v1/chat/completions", server.uri()),
        );
        let messages = [ChatMessage::system("sys"), ChatMessage::user("hello")];
        let content = client
            .chat_completion("gpt-3.5-turbo", &messages, options())
            .await
            .unwrap();
        assert_eq!(content, "Готово");
    }

    #[tokio::test]
    async fn empty_choices_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-test".to_string(), server.uri());
        let err = client
            .chat_completion("gpt-3.5-turbo", &[ChatMessage::user("x")], options())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-test".to_string(), server.uri());
        let err = client
            .chat_completion("gpt-3.5-turbo", &[ChatMessage::user("x")], options())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Decode { .. }));
        assert!(err.to_string().starts_with("invalid completion response"));
    }

    #[tokio::test]
    async fn http_error_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = OpenAiClient::new("sk-bad".to_string(), server.uri());
        let err = client
            .chat_completion("gpt-3.5-turbo", &[ChatMessage::user("x")], options())
            .await
            .unwrap_err();
        match err {
            LlmError::Status { status, body, .. } => {
                assert_eq!(status.as_u16(), 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_key_fails_before_request() {
        let client = OpenAiClient::new("  ".to_string(), "http://127.0.0.1:9/never");
        let err = client
            .chat_completion("gpt-3.5-turbo", &[ChatMessage::user("x")], options())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}

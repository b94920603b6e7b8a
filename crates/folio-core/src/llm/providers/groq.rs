//! Groq provider implementation (OpenAI-compatible chat completions)

use crate::config::VendorConfig;
use crate::error::{FolioError, FolioResult};
use crate::llm::classifier::AdapterError;
use crate::llm::provider_types::ProviderDescriptor;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::error_utils::{handle_http_error, handle_parse_error, handle_request_error};

/// Default Groq API base URL
pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

const PROVIDER_LABEL: &str = "Groq";

/// Groq provider handler
pub struct GroqProvider {
    model: String,
    api_key: String,
    base_url: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new Groq provider. Fails when no API key is configured.
    pub fn new(
        descriptor: &ProviderDescriptor,
        settings: &VendorConfig,
        http_client: Client,
    ) -> FolioResult<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                FolioError::config(format!("Groq API key not provided for {}", descriptor.name))
            })?;

        Ok(Self {
            model: descriptor.model_id.clone(),
            api_key,
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| GROQ_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            http_client,
        })
    }

    /// Send the prompt as a single user message and return the reply text
    #[instrument(skip(self, prompt), fields(model = %self.model), level = "debug")]
    pub async fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        let url = format!("{}/chat/completions", self.base_url);

        let mut request_body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });
        if let Some(max_tokens) = self.max_tokens {
            request_body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            request_body["temperature"] = json!(temperature);
        }

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| handle_request_error(e, PROVIDER_LABEL))?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, PROVIDER_LABEL).await);
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| handle_parse_error(e, PROVIDER_LABEL))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| AdapterError::new("Groq returned no content"))?;

        tracing::debug!(chars = content.len(), "Groq response received");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::classifier::FailureKind;
    use crate::llm::provider_types::Vendor;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(base_url: &str) -> GroqProvider {
        let descriptor = ProviderDescriptor::new("groq-primary", "gemma2-9b-it", Vendor::Groq);
        let settings = VendorConfig {
            api_key: Some("test-api-key".into()),
            base_url: Some(base_url.to_string()),
            temperature: Some(0.7),
            max_tokens: None,
        };
        let http_client = Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");
        GroqProvider::new(&descriptor, &settings, http_client).unwrap()
    }

    fn mock_completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test123",
            "object": "chat.completion",
            "model": "gemma2-9b-it",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-api-key"))
            .and(body_partial_json(json!({
                "model": "gemma2-9b-it",
                "messages": [{ "role": "user", "content": "Hello!" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_completion("Hi there")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let reply = provider.generate("Hello!").await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn test_rate_limit_is_capacity() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {
                    "message": "Rate limit reached for model `gemma2-9b-it` on tokens per day (TPD)",
                    "type": "tokens",
                    "code": "rate_limit_exceeded"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("Hello!").await.unwrap_err();
        assert_eq!(err.http_status, Some(429));
        assert_eq!(err.kind(), FailureKind::Capacity);
        assert!(err.raw_message.contains("Groq API error"));
    }

    #[tokio::test]
    async fn test_invalid_key_is_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Invalid API Key", "code": "invalid_api_key" }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("Hello!").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Fatal);
        assert!(!err.raw_message.contains("test-api-key"));
    }

    #[tokio::test]
    async fn test_server_error_is_transient() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("Hello!").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Transient);
    }

    #[tokio::test]
    async fn test_empty_choices_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("Hello!").await.unwrap_err();
        assert!(err.raw_message.contains("no content"));
    }

    /// A local port with "429" in it that nothing is listening on
    fn closed_port_with_429() -> u16 {
        [4290u16, 14290, 24290, 34290, 42900, 42901, 42902, 54291]
            .into_iter()
            .find(|port| std::net::TcpListener::bind(("127.0.0.1", *port)).is_ok())
            .expect("no free port containing 429")
    }

    #[tokio::test]
    async fn test_connection_refused_is_transient_regardless_of_url() {
        let port = closed_port_with_429();
        let provider = create_test_provider(&format!("http://127.0.0.1:{port}"));

        let err = provider.generate("Hello!").await.unwrap_err();
        assert!(err.raw_message.starts_with("Groq request failed"));
        assert!(!err.raw_message.contains(&port.to_string()));
        assert_eq!(err.http_status, None);
        assert_eq!(err.kind(), FailureKind::Transient);
    }

    #[tokio::test]
    async fn test_malformed_body_omits_url() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("Hello!").await.unwrap_err();
        assert!(err.raw_message.starts_with("Failed to parse Groq response"));
        assert!(!err.raw_message.contains(&mock_server.uri()));
        assert_eq!(err.kind(), FailureKind::Transient);
    }

    #[test]
    fn test_missing_key_rejected() {
        let descriptor = ProviderDescriptor::new("groq-primary", "gemma2-9b-it", Vendor::Groq);
        let result = GroqProvider::new(&descriptor, &VendorConfig::default(), Client::new());
        assert!(matches!(result, Err(e) if e.is_config()));
    }
}

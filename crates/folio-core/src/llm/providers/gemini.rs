//! Google Gemini provider implementation

use crate::config::VendorConfig;
use crate::error::{FolioError, FolioResult};
use crate::llm::classifier::AdapterError;
use crate::llm::provider_types::ProviderDescriptor;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use super::error_utils::{handle_http_error, handle_parse_error, handle_request_error};

/// Default Gemini API base URL
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const PROVIDER_LABEL: &str = "Gemini";

/// Gemini provider handler
pub struct GeminiProvider {
    model: String,
    api_key: String,
    base_url: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider. Fails when no API key is configured.
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
                FolioError::config(format!(
                    "Gemini API key not provided for {}",
                    descriptor.name
                ))
            })?;

        Ok(Self {
            model: descriptor.model_id.clone(),
            api_key,
            base_url: settings
                .base_url
                .clone()
                .unwrap_or_else(|| GEMINI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            http_client,
        })
    }

    /// Send the prompt as a single user turn and return the concatenated text parts
    #[instrument(skip(self, prompt), fields(model = %self.model), level = "debug")]
    pub async fn generate(&self, prompt: &str) -> Result<String, AdapterError> {
        // Key goes in a header so it never appears in a reqwest error URL.
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut request_body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
        });

        let mut generation_config = json!({});
        if let Some(max_tokens) = self.max_tokens {
            generation_config["maxOutputTokens"] = json!(max_tokens);
        }
        if let Some(temperature) = self.temperature {
            generation_config["temperature"] = json!(temperature);
        }
        if generation_config.as_object().is_some_and(|obj| !obj.is_empty()) {
            request_body["generationConfig"] = generation_config;
        }

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| handle_request_error(e, PROVIDER_LABEL))?;

        if !response.status().is_success() {
            return Err(handle_http_error(response, PROVIDER_LABEL).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| handle_parse_error(e, PROVIDER_LABEL))?;

        if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(AdapterError::new(format!(
                "Gemini blocked the prompt: {}",
                reason
            )));
        }

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AdapterError::new("Gemini returned no content"));
        }

        tracing::debug!(chars = text.len(), "Gemini response received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::classifier::FailureKind;
    use crate::llm::provider_types::Vendor;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(base_url: &str) -> GeminiProvider {
        let descriptor =
            ProviderDescriptor::new("gemini-fallback", "gemini-1.5-flash", Vendor::Gemini);
        let settings = VendorConfig {
            api_key: Some("test-gemini-key".into()),
            base_url: Some(format!("{}/", base_url)),
            temperature: None,
            max_tokens: Some(256),
        };
        let http_client = Client::builder()
            .no_proxy()
            .build()
            .expect("Failed to create HTTP client");
        GeminiProvider::new(&descriptor, &settings, http_client).unwrap()
    }

    #[tokio::test]
    async fn test_generate_joins_parts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-gemini-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [{ "text": "Hello, " }, { "text": "world" }]
                    },
                    "finishReason": "STOP"
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        assert_eq!(provider.generate("hi").await.unwrap(), "Hello, world");
    }

    #[tokio::test]
    async fn test_resource_exhausted_is_capacity() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {
                    "code": 429,
                    "message": "Resource has been exhausted (e.g. check quota).",
                    "status": "RESOURCE_EXHAUSTED"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("hi").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Capacity);
    }

    #[tokio::test]
    async fn test_bad_key_is_fatal() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "API key not valid. Please pass a valid API key.",
                    "status": "INVALID_ARGUMENT"
                }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("hi").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Fatal);
        assert_eq!(err.http_status, Some(400));
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server.uri());
        let err = provider.generate("hi").await.unwrap_err();
        assert!(err.raw_message.contains("SAFETY"));
    }
}

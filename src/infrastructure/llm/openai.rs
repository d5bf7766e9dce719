use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::llm::{
    FinishReason, FunctionCall, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole, Usage,
};
use crate::domain::{CredentialProvider, CredentialType, DomainError};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// OpenAI API provider.
///
/// The API key is resolved through the injected credential provider on
/// every call, before any network traffic: a missing key fails the
/// request, not the process.
#[derive(Debug)]
pub struct OpenAiProvider<C: HttpClientTrait> {
    client: C,
    credentials: Arc<dyn CredentialProvider>,
    base_url: String,
}

impl<C: HttpClientTrait> OpenAiProvider<C> {
    pub fn new(client: C, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_base_url(client, credentials, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        credentials: Arc<dyn CredentialProvider>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, model: &str, request: &LlmRequest) -> serde_json::Value {
        let messages: Vec<OpenAiMessage> = request
            .messages
            .iter()
            .map(OpenAiMessage::from_domain)
            .collect();

        let mut body = serde_json::json!({
            "model": model,
            "messages": messages,
        });

        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }

        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }

        if !request.functions.is_empty() {
            let tools: Vec<serde_json::Value> = request
                .functions
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "type": "function",
                        "function": {
                            "name": f.name,
                            "description": f.description,
                            "parameters": f.parameters,
                        }
                    })
                })
                .collect();
            body["tools"] = serde_json::json!(tools);
        }

        // A forced function call removes the model's free-text path
        if let Some(ref name) = request.forced_function {
            body["tool_choice"] = serde_json::json!({
                "type": "function",
                "function": { "name": name }
            });
        }

        body
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<LlmResponse, DomainError> {
        let response: OpenAiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse response: {}", e))
        })?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("openai", "No choices in response"))?;

        let message = Message::assistant(choice.message.content.unwrap_or_default());
        let mut llm_response = LlmResponse::new(response.id, response.model, message);

        // Tool-call form takes precedence; legacy function_call is kept
        // for older model versions that still answer through it.
        if let Some(tool_call) = choice
            .message
            .tool_calls
            .and_then(|calls| calls.into_iter().next())
        {
            llm_response = llm_response.with_function_call(FunctionCall::new(
                tool_call.function.name,
                tool_call.function.arguments,
            ));
        } else if let Some(call) = choice.message.function_call {
            llm_response =
                llm_response.with_function_call(FunctionCall::new(call.name, call.arguments));
        }

        if let Some(reason) = choice.finish_reason {
            llm_response = llm_response.with_finish_reason(parse_finish_reason(&reason));
        }

        if let Some(usage) = response.usage {
            llm_response = llm_response
                .with_usage(Usage::new(usage.prompt_tokens, usage.completion_tokens));
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for OpenAiProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let credential = self
            .credentials
            .get_credential(&CredentialType::OpenAi)
            .await?;
        let auth_header = format!("Bearer {}", credential.api_key());

        let url = self.chat_completions_url();
        let body = self.build_request(model, &request);
        let headers = vec![
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.client.post_json(&url, headers, &body).await?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "stop" => FinishReason::Stop,
        "length" => FinishReason::Length,
        "content_filter" => FinishReason::ContentFilter,
        "tool_calls" | "function_call" => FinishReason::ToolCalls,
        _ => FinishReason::Stop,
    }
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

impl OpenAiMessage {
    fn from_domain(message: &Message) -> Self {
        let role = match message.role {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        };

        Self {
            role: role.to_string(),
            content: message.content.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    id: String,
    model: String,
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAiToolCall>>,
    function_call: Option<OpenAiFunctionCall>,
}

#[derive(Debug, Deserialize)]
struct OpenAiToolCall {
    function: OpenAiFunctionCall,
}

#[derive(Debug, Deserialize)]
struct OpenAiFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credentials::mock::MockCredentialProvider;
    use crate::domain::llm::FunctionSpec;
    use crate::domain::Credential;
    use crate::infrastructure::http_client::mock::MockHttpClient;

    const TEST_URL: &str = "https://api.openai.com/v1/chat/completions";

    fn provider_with_key() -> Arc<MockCredentialProvider> {
        Arc::new(
            MockCredentialProvider::new("mock").with_credential(Credential::new(
                CredentialType::OpenAi,
                "sk-test-key".to_string(),
            )),
        )
    }

    #[tokio::test]
    async fn test_openai_chat_with_tool_call() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-123",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "output_formatter",
                            "arguments": "{\"rent\":950}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {
                "prompt_tokens": 120,
                "completion_tokens": 15,
                "total_tokens": 135
            }
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiProvider::new(client, provider_with_key());

        let request = LlmRequest::builder()
            .user("Extract the fields")
            .function(FunctionSpec::new(
                "output_formatter",
                serde_json::json!({"type": "object"}),
            ))
            .force_function("output_formatter")
            .build();

        let response = provider.chat("gpt-4o-mini", request).await.unwrap();

        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.finish_reason, Some(FinishReason::ToolCalls));

        let usage = response.usage.unwrap();
        assert_eq!(usage.total_tokens, 135);

        let call = response.function_call.unwrap();
        assert_eq!(call.name, "output_formatter");
        assert_eq!(call.arguments, "{\"rent\":950}");
    }

    #[tokio::test]
    async fn test_request_body_carries_forced_tool_choice() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": "ok" },
                "finish_reason": "stop"
            }]
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiProvider::new(client, provider_with_key());

        let request = LlmRequest::builder()
            .user("hello")
            .temperature(0.1)
            .function(FunctionSpec::new(
                "output_formatter",
                serde_json::json!({"type": "object", "properties": {}}),
            ))
            .force_function("output_formatter")
            .build();

        provider.chat("gpt-4o-mini", request).await.unwrap();

        let requests = provider.client.requests();
        assert_eq!(requests.len(), 1);

        let body = &requests[0].1;
        assert_eq!(body["temperature"], 0.1);
        assert_eq!(body["tools"][0]["function"]["name"], "output_formatter");
        assert_eq!(body["tool_choice"]["type"], "function");
        assert_eq!(body["tool_choice"]["function"]["name"], "output_formatter");
    }

    #[tokio::test]
    async fn test_legacy_function_call_response() {
        let mock_response = serde_json::json!({
            "id": "chatcmpl-2",
            "model": "gpt-3.5-turbo-0125",
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "function_call": {
                        "name": "output_formatter",
                        "arguments": "{\"deposit\":1900}"
                    }
                },
                "finish_reason": "function_call"
            }]
        });

        let client = MockHttpClient::new().with_response(TEST_URL, mock_response);
        let provider = OpenAiProvider::new(client, provider_with_key());

        let response = provider
            .chat(
                "gpt-3.5-turbo-0125",
                LlmRequest::builder().user("extract").build(),
            )
            .await
            .unwrap();

        assert_eq!(response.finish_reason, Some(FinishReason::ToolCalls));
        assert_eq!(
            response.function_call.unwrap().arguments,
            "{\"deposit\":1900}"
        );
    }

    #[tokio::test]
    async fn test_missing_credential_fails_before_network() {
        let client = MockHttpClient::new();
        let provider = OpenAiProvider::new(client, Arc::new(MockCredentialProvider::new("mock")));

        let err = provider
            .chat("gpt-4o-mini", LlmRequest::builder().user("Hello!").build())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Credential { .. }));
        assert!(provider.client.requests().is_empty());
    }

    #[tokio::test]
    async fn test_openai_error_handling() {
        let client = MockHttpClient::new().with_error(TEST_URL, "API key invalid");
        let provider = OpenAiProvider::new(client, provider_with_key());

        let result = provider
            .chat("gpt-4o-mini", LlmRequest::builder().user("Hello!").build())
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_openai_custom_base_url() {
        let custom_url = "http://localhost:8080/v1/chat/completions";
        let mock_response = serde_json::json!({
            "id": "chatcmpl-custom",
            "model": "gpt-4o-mini",
            "choices": [{
                "message": { "role": "assistant", "content": "Custom response" },
                "finish_reason": "stop"
            }]
        });

        let client = MockHttpClient::new().with_response(custom_url, mock_response);
        let provider =
            OpenAiProvider::with_base_url(client, provider_with_key(), "http://localhost:8080");

        let response = provider
            .chat("gpt-4o-mini", LlmRequest::builder().user("Test").build())
            .await
            .unwrap();

        assert_eq!(response.id, "chatcmpl-custom");
        assert!(response.function_call.is_none());
    }
}

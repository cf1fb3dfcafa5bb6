//! Conversation service client.
//!
//! The endpoint takes the whole message history and answers with the next
//! assistant message:
//!
//! ```text
//! POST /api/ai/conversation
//! {"messages":[{"role":"user","content":"Tell me a joke"}]}
//!
//! 200 OK
//! {"role":"assistant","content":"Why did..."}
//! ```

use reqwest::Client;
use serde::Serialize;

use crate::message::Message;

/// Default endpoint, relative to a locally served app.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/ai/conversation";

/// Request body sent to the conversation endpoint.
#[derive(Debug, Serialize)]
struct ConversationRequest<'a> {
    messages: &'a [Message],
}

/// The request did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Connection or protocol failure.
    #[error("conversation request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("conversation service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not a message.
    #[error("conversation reply could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// The task running the request ended without a result.
    #[error("conversation request did not complete: {0}")]
    Interrupted(String),
}

/// External collaborator that produces the next assistant message.
#[async_trait::async_trait]
pub trait ConversationService: Send + Sync {
    /// Send the full ordered history and wait for the reply.
    async fn converse(&self, messages: &[Message]) -> Result<Message, ServiceError>;
}

/// HTTP implementation posting JSON to a conversation endpoint.
#[derive(Debug, Clone)]
pub struct HttpConversationService {
    client: Client,
    endpoint: String,
}

impl HttpConversationService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl ConversationService for HttpConversationService {
    async fn converse(&self, messages: &[Message]) -> Result<Message, ServiceError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            messages = messages.len(),
            "sending conversation request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(&ConversationRequest { messages })
            .send()
            .await
            .map_err(ServiceError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Message>().await.map_err(ServiceError::Decode)
    }
}

/// Offline service with deterministic replies.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConversationService;

#[async_trait::async_trait]
impl ConversationService for MockConversationService {
    async fn converse(&self, messages: &[Message]) -> Result<Message, ServiceError> {
        let last = messages.last().map_or("empty", Message::content);
        Ok(Message::assistant(format!("Mock response to: {last}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ROUTE: &str = "/api/ai/conversation";

    fn endpoint(server: &MockServer) -> String {
        format!("{}{ROUTE}", server.uri())
    }

    #[tokio::test]
    async fn test_posts_full_history_and_decodes_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ROUTE))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "messages": [
                    {"role": "user", "content": "Tell me a joke"},
                    {"role": "assistant", "content": "Why did..."},
                    {"role": "user", "content": "Another one please"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "role": "assistant",
                "content": "Knock knock"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpConversationService::new(endpoint(&server));
        let history = vec![
            Message::user("Tell me a joke"),
            Message::assistant("Why did..."),
            Message::user("Another one please"),
        ];

        let reply = service.converse(&history).await.unwrap();
        assert_eq!(reply, Message::assistant("Knock knock"));
    }

    #[tokio::test]
    async fn test_error_status_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ROUTE))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal error"))
            .mount(&server)
            .await;

        let service = HttpConversationService::new(endpoint(&server));
        let err = service
            .converse(&[Message::user("Tell me a joke")])
            .await
            .unwrap_err();

        match err {
            ServiceError::Status { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal error");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_reply_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ROUTE))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let service = HttpConversationService::new(endpoint(&server));
        let err = service
            .converse(&[Message::user("Tell me a joke")])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_failure() {
        // Nothing listens on port 9 (discard) in the test environment
        let service = HttpConversationService::new("http://127.0.0.1:9/api/ai/conversation");
        let err = service
            .converse(&[Message::user("Tell me a joke")])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Transport(_)));
    }

    #[tokio::test]
    async fn test_mock_service_echoes_last_message() {
        let reply = MockConversationService
            .converse(&[Message::user("Hello, world!")])
            .await
            .unwrap();
        assert_eq!(reply.content(), "Mock response to: Hello, world!");
        assert_eq!(reply.role(), crate::Role::Assistant);
    }
}

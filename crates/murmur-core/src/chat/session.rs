//! Conversation session: ordered turn history plus the one operation that
//! drives it, [`ConversationSession::send_turn`].
//!
//! The session is in-memory only and append-only: each exchange appends one
//! user turn and one assistant turn (answer or fallback), in that order.
//! Errors from the completion service never cross this boundary; they are
//! logged and collapsed into a fixed fallback turn.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use murmur_types::config::CompletionConfig;
use murmur_types::llm::{ChatMessage, CompletionRequest};
use murmur_types::turn::{Turn, TurnRole};

use crate::llm::client::CompletionClient;

/// Fixed assistant reply appended when an exchange fails for any reason.
pub const FALLBACK_REPLY: &str = "I apologize, but I encountered an error \
while processing your request. Please try again in a moment.";

/// What a call to [`ConversationSession::send_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Input was empty after trimming; nothing was appended.
    Ignored,
    /// The service answered; a real assistant turn was appended.
    Answered,
    /// The exchange failed; the fallback turn was appended.
    Fallback,
}

/// One conversation: an ordered, append-only history of turns.
///
/// `send_turn` takes the session by exclusive borrow, so a second submission
/// cannot race an in-flight one. The `awaiting` flag exists for callers that
/// observe the session between polls (the CLI uses it to decide whether a
/// thinking indicator belongs on screen).
#[derive(Debug)]
pub struct ConversationSession {
    id: Uuid,
    config: CompletionConfig,
    turns: Vec<Turn>,
    awaiting: bool,
    started_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Create an empty session with the given completion configuration.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            id: Uuid::now_v7(),
            config,
            turns: Vec::new(),
            awaiting: false,
            started_at: Utc::now(),
        }
    }

    /// Session identifier (display-only).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The completion configuration this session sends with every request.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// When this session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The ordered turn history. Insertion order is display order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recently appended turn, if any.
    pub fn last_turn(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Whether an exchange is currently in flight.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Run one exchange: append a user turn, call the completion service
    /// with the full history, append the assistant's answer (or the fixed
    /// fallback turn on any failure).
    ///
    /// Empty or whitespace-only input is a no-op. No error is returned to
    /// the caller; failures are observable only as the fallback turn and
    /// the [`TurnOutcome::Fallback`] result.
    pub async fn send_turn<C: CompletionClient>(
        &mut self,
        client: &C,
        text: &str,
    ) -> TurnOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.turns.push(Turn::user(trimmed));
        self.awaiting = true;

        let request = self.build_request();
        debug!(
            session_id = %self.id,
            model = %request.model,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let outcome = match client.complete(&request).await {
            Ok(response) => {
                self.turns.push(Turn::assistant(response.content));
                TurnOutcome::Answered
            }
            Err(e) => {
                warn!(
                    session_id = %self.id,
                    client = client.name(),
                    error = %e,
                    "Completion failed, appending fallback turn"
                );
                self.turns.push(Turn::assistant(FALLBACK_REPLY));
                TurnOutcome::Fallback
            }
        };

        // Cleared on both paths: the state machine is Idle -> Awaiting -> Idle.
        self.awaiting = false;
        outcome
    }

    /// Reduce the full turn history to `{role, content}` pairs and attach
    /// the configured model, temperature, and token budget.
    fn build_request(&self) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            messages: self.turns.iter().map(ChatMessage::from).collect(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Count of turns authored by the given role.
    pub fn count_role(&self, role: TurnRole) -> usize {
        self.turns.iter().filter(|t| t.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use murmur_types::llm::{CompletionResponse, LlmError};

    /// In-memory completion client that records every request it receives
    /// and replays queued results.
    struct MockClient {
        results: Mutex<VecDeque<Result<CompletionResponse, LlmError>>>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                results: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn answering(content: &str) -> Self {
            let mock = Self::new();
            mock.push_ok(content);
            mock
        }

        fn failing(error: LlmError) -> Self {
            let mock = Self::new();
            mock.results.lock().unwrap().push_back(Err(error));
            mock
        }

        fn push_ok(&self, content: &str) {
            self.results.lock().unwrap().push_back(Ok(CompletionResponse {
                id: "chatcmpl-test".to_string(),
                model: "mixtral-8x7b-32768".to_string(),
                content: content.to_string(),
            }));
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl CompletionClient for MockClient {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("mock client called more times than results were queued")
        }
    }

    fn session() -> ConversationSession {
        ConversationSession::new(CompletionConfig::default())
    }

    #[tokio::test]
    async fn test_success_appends_user_then_assistant() {
        let client = MockClient::answering("Hi there");
        let mut session = session();

        let outcome = session.send_turn(&client, "Hello").await;

        assert_eq!(outcome, TurnOutcome::Answered);
        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[0].role, TurnRole::User);
        assert_eq!(session.turns()[0].content, "Hello");
        assert_eq!(session.turns()[1].role, TurnRole::Assistant);
        assert_eq!(session.turns()[1].content, "Hi there");
        assert!(!session.is_awaiting());
    }

    #[tokio::test]
    async fn test_empty_input_is_a_no_op() {
        let client = MockClient::new();
        let mut session = session();

        assert_eq!(session.send_turn(&client, "").await, TurnOutcome::Ignored);
        assert_eq!(session.send_turn(&client, "   ").await, TurnOutcome::Ignored);
        assert_eq!(session.send_turn(&client, "\t\n").await, TurnOutcome::Ignored);

        assert!(session.turns().is_empty());
        assert!(client.requests().is_empty());
        assert!(!session.is_awaiting());
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_append() {
        let client = MockClient::answering("ok");
        let mut session = session();

        session.send_turn(&client, "  Hello  ").await;
        assert_eq!(session.turns()[0].content, "Hello");
        assert_eq!(client.requests()[0].messages[0].content, "Hello");
    }

    #[tokio::test]
    async fn test_failure_appends_fallback_turn() {
        let client = MockClient::failing(LlmError::Status {
            status: 500,
            body: "internal error".to_string(),
        });
        let mut session = session();

        let outcome = session.send_turn(&client, "Hello").await;

        assert_eq!(outcome, TurnOutcome::Fallback);
        assert_eq!(session.turns().len(), 2);
        assert_eq!(session.turns()[0].content, "Hello");
        assert_eq!(session.turns()[1].role, TurnRole::Assistant);
        assert_eq!(session.turns()[1].content, FALLBACK_REPLY);
        assert!(!session.is_awaiting());
    }

    #[tokio::test]
    async fn test_transport_failure_also_falls_back() {
        let client =
            MockClient::failing(LlmError::Transport("connection refused".to_string()));
        let mut session = session();

        let outcome = session.send_turn(&client, "Hello").await;
        assert_eq!(outcome, TurnOutcome::Fallback);
        assert_eq!(session.last_turn().unwrap().content, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_malformed_response_also_falls_back() {
        let client = MockClient::failing(LlmError::MalformedResponse(
            "response has no choices".to_string(),
        ));
        let mut session = session();

        let outcome = session.send_turn(&client, "Hello").await;
        assert_eq!(outcome, TurnOutcome::Fallback);
        assert_eq!(session.last_turn().unwrap().content, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_request_carries_full_history_without_ids() {
        let client = MockClient::answering("First answer");
        client.push_ok("Second answer");
        let mut session = session();

        session.send_turn(&client, "First question").await;
        session.send_turn(&client, "Second question").await;

        let requests = client.requests();
        assert_eq!(requests.len(), 2);

        // First call: just the newest user turn.
        assert_eq!(requests[0].messages.len(), 1);

        // Second call: the full ordered history including the new user turn.
        let msgs = &requests[1].messages;
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0].role, TurnRole::User);
        assert_eq!(msgs[0].content, "First question");
        assert_eq!(msgs[1].role, TurnRole::Assistant);
        assert_eq!(msgs[1].content, "First answer");
        assert_eq!(msgs[2].role, TurnRole::User);
        assert_eq!(msgs[2].content, "Second question");
    }

    #[tokio::test]
    async fn test_request_uses_session_config() {
        let client = MockClient::answering("ok");
        let config = CompletionConfig {
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.2,
            max_tokens: 256,
            ..CompletionConfig::default()
        };
        let mut session = ConversationSession::new(config);

        session.send_turn(&client, "Hello").await;

        let request = &client.requests()[0];
        assert_eq!(request.model, "llama-3.3-70b-versatile");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.max_tokens, 256);
    }

    #[tokio::test]
    async fn test_turn_order_preserved_across_mixed_outcomes() {
        let client = MockClient::answering("fine");
        client
            .results
            .lock()
            .unwrap()
            .push_back(Err(LlmError::RateLimited));
        client.push_ok("back again");
        let mut session = session();

        session.send_turn(&client, "one").await;
        session.send_turn(&client, "two").await;
        session.send_turn(&client, "three").await;

        let contents: Vec<&str> = session
            .turns()
            .iter()
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(
            contents,
            vec!["one", "fine", "two", FALLBACK_REPLY, "three", "back again"]
        );
        assert_eq!(session.count_role(TurnRole::User), 3);
        assert_eq!(session.count_role(TurnRole::Assistant), 3);
    }

    #[test]
    fn test_new_session_is_empty_and_idle() {
        let session = session();
        assert!(session.turns().is_empty());
        assert!(session.last_turn().is_none());
        assert!(!session.is_awaiting());
    }
}

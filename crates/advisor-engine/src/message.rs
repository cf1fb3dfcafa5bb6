//! Conversation messages and the session transcript.
//!
//! A [`Message`] is immutable once built. The [`Transcript`] only grows, and
//! a user message is always committed together with the reply it produced.

use serde::{Deserialize, Serialize};

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the user.
    User,
    /// Reply returned by the conversation service.
    Assistant,
}

impl Role {
    /// Lowercase name, as it appears on the wire and in card footers.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Ordered log of the messages exchanged in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in the order they are drawn: most recent first.
    pub fn display_order(&self) -> impl Iterator<Item = &Message> + '_ {
        self.messages.iter().rev()
    }

    /// Build the outbound context for a new message without committing it.
    pub fn context_with(&self, next: &Message) -> Vec<Message> {
        let mut context = Vec::with_capacity(self.messages.len() + 1);
        context.extend_from_slice(&self.messages);
        context.push(next.clone());
        context
    }

    /// Commit a question and its reply as a single update.
    pub fn append_exchange(&mut self, question: Message, reply: Message) {
        self.messages.reserve(2);
        self.messages.push(question);
        self.messages.push(reply);
    }
}

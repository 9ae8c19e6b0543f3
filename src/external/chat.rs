// ABOUTME: Chat-completion interface taking a system prompt and message history
// ABOUTME: Message role types plus a scripted mock completion for tests

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nutriplan Contributors

use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

/// A single message in a chat conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

// ============================================================================
// Completion Trait
// ============================================================================

/// Chat-completion collaborator
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Complete a conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails or returns no text
    async fn complete(&self, system_prompt: &str, history: &[ChatMessage]) -> AppResult<String>;
}

/// Mock completion returning a fixed reply, or failing when no reply is set
///
/// A blank reply is reported as a provider error, like a real provider
/// returning no text.
#[derive(Debug, Clone, Default)]
pub struct MockChatCompletion {
    reply: Option<String>,
}

impl MockChatCompletion {
    /// Mock that always answers with `reply`
    #[must_use]
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    /// Mock that always fails
    #[must_use]
    pub const fn failing() -> Self {
        Self { reply: None }
    }
}

#[async_trait]
impl ChatCompletion for MockChatCompletion {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, _system_prompt: &str, history: &[ChatMessage]) -> AppResult<String> {
        if history.is_empty() {
            return Err(AppError::invalid_input("Conversation history cannot be empty"));
        }
        match &self.reply {
            Some(reply) if reply.trim().is_empty() => {
                Err(AppError::external_service(self.name(), "completion returned no text"))
            }
            Some(reply) => Ok(reply.clone()),
            None => Err(AppError::external_unavailable(self.name())),
        }
    }
}

//! Bounded chat history
//!
//! Conversation state for the chat collaborator: an ordered log with a fixed
//! capacity that evicts the oldest entry on overflow. Deliberately outside
//! the query engine's contract; the engine never sees it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of messages retained per user
pub const DEFAULT_CAPACITY: usize = 20;

/// One chat turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "user" or "assistant"
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Bounded ordered message log, oldest-evicted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatLog {
    capacity: usize,
    messages: VecDeque<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ChatLog {
    pub fn new(capacity: usize) -> Self {
        // A zero-capacity log can't hold the message being pushed
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a message, evicting the oldest if the log is full
    pub fn push(&mut self, message: ChatMessage) {
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

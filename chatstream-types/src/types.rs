//! Core message and chunk types.

use serde::{Deserialize, Serialize};

use crate::stream::StreamError;

/// The role of a message participant.
///
/// Serializes lowercase (`user` / `assistant` / `system`), which is the wire
/// form both provider families expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// An AI assistant.
    Assistant,
    /// A system message.
    System,
}

/// A single message in a conversation.
///
/// Input to a request; ownership is transient and held only while the request
/// body is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: Role,
    /// The text content.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// One unit of streamed output: a text fragment, the done marker, or an
/// in-stream error.
///
/// Once a chunk with `done == true` or a set `error` is delivered, no further
/// chunks arrive on that stream.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    /// Text fragment; may be empty.
    pub content: String,
    /// Terminal marker: the model finished normally.
    pub done: bool,
    /// In-stream failure cause; terminal when set.
    pub error: Option<StreamError>,
}

impl Chunk {
    /// A chunk carrying a text fragment.
    #[must_use]
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            ..Self::default()
        }
    }

    /// The terminal done marker.
    #[must_use]
    pub fn done() -> Self {
        Self {
            done: true,
            ..Self::default()
        }
    }

    /// A terminal error chunk.
    #[must_use]
    pub fn error(error: StreamError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    /// Whether this chunk ends the stream.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.done || self.error.is_some()
    }

    /// Whether this chunk carries nothing a caller would act on.
    ///
    /// The pipeline suppresses these so purely structural protocol events
    /// never cross the boundary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && !self.is_terminal()
    }
}

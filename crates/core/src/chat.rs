//! Chat companion model.

use crate::id::{MessageId, QuickActionId};
use crate::Time;
use serde::{Deserialize, Serialize};

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using the app
    User,
    /// The scripted companion
    Buddy,
}

/// A message in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique identifier
    pub id: MessageId,

    /// Message text
    pub text: String,

    /// Author
    pub sender: Sender,

    /// When it was posted
    pub timestamp: Time,
}

impl ChatMessage {
    /// Create a message stamped at `timestamp`.
    pub fn new(sender: Sender, text: impl Into<String>, timestamp: Time) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            timestamp,
        }
    }
}

/// Category of a quick action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuickActionKind {
    /// Urge or crisis moment
    Emergency,
    /// Pep talk
    Motivation,
    /// Something to go do
    Activity,
}

/// A canned prompt with a fixed reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    /// Action key
    pub id: QuickActionId,

    /// Prompt shown on the button and recorded as the user's message
    pub text: String,

    /// Fixed companion reply
    pub response: String,

    /// Category
    pub kind: QuickActionKind,
}

// src/chat/mod.rs
// Canned-reply assistant behind the chat widget

mod conversation;
mod panel;
mod responder;
mod rules;

pub use conversation::Conversation;
pub use panel::ChatPanel;
pub use responder::{ChatResponder, ReplyHandle, REPLY_DELAY};
pub use rules::{classify, ReplyRule, DEFAULT_REPLY, REPLY_RULES};

use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hi! Ask me about invoices, stock, or reports.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new_user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn new_assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use super::conversation::lock_messages;
use super::{classify, ChatMessage, Conversation, ReplyRule, REPLY_RULES};

/// UX pacing before the assistant answers.
pub const REPLY_DELAY: Duration = Duration::from_millis(400);

/// Answers chat input from an ordered keyword rule list.
#[derive(Debug, Clone)]
pub struct ChatResponder {
    rules: &'static [ReplyRule],
    delay: Duration,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(REPLY_RULES, REPLY_DELAY)
    }
}

impl ChatResponder {
    pub fn new(rules: &'static [ReplyRule], delay: Duration) -> Self {
        Self { rules, delay }
    }

    /// Appends the user message now and schedules the assistant reply.
    ///
    /// Blank input is ignored and returns `None`. Must be called from within a
    /// tokio runtime.
    pub fn respond(&self, conversation: &Conversation, utterance: &str) -> Option<ReplyHandle> {
        if utterance.trim().is_empty() {
            return None;
        }

        conversation.push(ChatMessage::new_user(utterance));

        let reply = classify(self.rules, utterance);
        let target = conversation.downgrade();
        let delay = self.delay;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match target.upgrade() {
                Some(messages) => {
                    lock_messages(&messages).push(ChatMessage::new_assistant(reply));
                    true
                }
                None => {
                    debug!("conversation dropped before reply was delivered");
                    false
                }
            }
        });

        Some(ReplyHandle { task, reply })
    }
}

/// A pending assistant reply.
#[derive(Debug)]
pub struct ReplyHandle {
    task: JoinHandle<bool>,
    reply: &'static str,
}

impl ReplyHandle {
    pub fn reply(&self) -> &'static str {
        self.reply
    }

    /// Suppresses the append if it has not happened yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the reply task. `true` only if the reply was appended.
    pub async fn join(self) -> bool {
        self.task.await.unwrap_or(false)
    }
}

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::{ChatMessage, GREETING};

/// Append-only message log. Clones share the same log; once every clone is
/// dropped, pending replies holding a weak reference have nowhere to land.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Arc<Mutex<Vec<ChatMessage>>>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the assistant's opening line.
    pub fn with_greeting() -> Self {
        let conversation = Self::new();
        conversation.push(ChatMessage::new_assistant(GREETING));
        conversation
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> Vec<ChatMessage> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<ChatMessage> {
        self.lock().last().cloned()
    }

    pub(crate) fn push(&self, message: ChatMessage) {
        self.lock().push(message);
    }

    pub(crate) fn downgrade(&self) -> Weak<Mutex<Vec<ChatMessage>>> {
        Arc::downgrade(&self.messages)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        lock_messages(&self.messages)
    }
}

/// A panicked writer cannot leave a half-appended message, so poisoning is ignored.
pub(crate) fn lock_messages(messages: &Mutex<Vec<ChatMessage>>) -> MutexGuard<'_, Vec<ChatMessage>> {
    messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;

    #[test]
    fn test_greeting_seed() {
        let conversation = Conversation::with_greeting();
        assert_eq!(conversation.len(), 1);
        let first = conversation.last().unwrap();
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.text, GREETING);
    }

    #[test]
    fn test_clones_share_log() {
        let conversation = Conversation::new();
        let view = conversation.clone();
        conversation.push(ChatMessage::new_user("hi"));
        assert_eq!(view.len(), 1);
        assert_eq!(view.snapshot()[0].text, "hi");
    }

    #[test]
    fn test_weak_dies_with_last_clone() {
        let conversation = Conversation::new();
        let weak = conversation.downgrade();
        let other = conversation.clone();
        drop(conversation);
        assert!(weak.upgrade().is_some());
        drop(other);
        assert!(weak.upgrade().is_none());
    }
}

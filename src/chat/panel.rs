use super::{ChatResponder, Conversation, ReplyHandle};

/// Chat widget state: visibility, input buffer and the pending replies it owns.
#[derive(Debug)]
pub struct ChatPanel {
    pub open: bool,
    input: String,
    conversation: Conversation,
    responder: ChatResponder,
    pending: Vec<ReplyHandle>,
}

impl ChatPanel {
    pub fn new(responder: ChatResponder) -> Self {
        Self {
            open: false,
            input: String::new(),
            conversation: Conversation::with_greeting(),
            responder,
            pending: Vec::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn handle_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Sends the input buffer to the responder. Blank input is left in place.
    pub fn submit(&mut self) -> bool {
        self.pending.retain(|handle| !handle.is_finished());

        match self.responder.respond(&self.conversation, &self.input) {
            Some(handle) => {
                self.input.clear();
                self.pending.push(handle);
                true
            }
            None => false,
        }
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.iter().filter(|handle| !handle.is_finished()).count()
    }
}

impl Drop for ChatPanel {
    fn drop(&mut self) {
        for handle in &self.pending {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn type_text(panel: &mut ChatPanel, text: &str) {
        for ch in text.chars() {
            panel.handle_input(ch);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_input_and_replies() {
        let mut panel = ChatPanel::new(ChatResponder::default());
        type_text(&mut panel, "need stocks");
        panel.backspace();

        assert!(panel.submit());
        assert_eq!(panel.input(), "");
        assert_eq!(panel.conversation().len(), 2);
        assert_eq!(panel.conversation().last().unwrap().text, "need stock");
        assert_eq!(panel.pending_replies(), 1);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(panel.conversation().len(), 3);
        assert_eq!(panel.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submit_keeps_buffer() {
        let mut panel = ChatPanel::new(ChatResponder::default());
        type_text(&mut panel, "  ");

        assert!(!panel.submit());
        assert_eq!(panel.input(), "  ");
        assert_eq!(panel.conversation().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        let mut panel = ChatPanel::new(ChatResponder::default());
        let view = panel.conversation().clone();
        type_text(&mut panel, "hello");
        panel.submit();
        drop(panel);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(view.len(), 2);
    }
}

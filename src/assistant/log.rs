//! Append-only conversation log

use crate::types::Message;

/// Ordered record of every message exchanged in the session.
///
/// Append-only: no deletion, no reordering, no deduplication. Insertion
/// order is both the display order and the context order sent to the
/// completion collaborator. Unbounded growth over a long session is an
/// accepted limitation — clearing is owned by the presentation shell.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. The single mutator.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages appended so far.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_append_order_equals_read_order() {
        let mut log = ConversationLog::new();
        log.append(Message::user("first"));
        log.append(Message::assistant("second"));
        log.append(Message::user("third"));

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_last_and_empty() {
        let mut log = ConversationLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());

        log.append(Message::assistant("hello"));
        let last = log.last().expect("last message");
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "hello");
    }
}

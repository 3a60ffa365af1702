//! Simulated support-chat state machine.
//!
//! States: `Idle` and `AwaitingReply`. Submitting non-empty text appends
//! one user message and hands the caller a token to schedule; delivering
//! that token appends the canned assistant reply and returns to `Idle`.
//! Empty or whitespace-only submissions are rejected with no transition.
//! A stale token (cancelled scope, superseded widget) is ignored; the
//! guard is silent, never an error.

use std::time::Duration;

/// Fixed delay before the simulated assistant reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// The one canned assistant response.
pub const CANNED_REPLY: &str = "I understand your question. Let me help you with that \
                                information. This is a simulated response for demonstration \
                                purposes.";

/// Who sent a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Student,
    Assistant,
}

impl Sender {
    /// Display name shown in the transcript.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Assistant => "AI Assistant",
        }
    }
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: String,
    /// Minute stamp for seeded demo messages; live messages carry none.
    pub stamp: Option<&'static str>,
}

/// Chat widget state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply { token: u64 },
}

/// The simulated chat widget.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    state: ChatState,
    transcript: Vec<ChatMessage>,
    next_token: u64,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    /// Empty chat in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ChatState::Idle,
            transcript: Vec::new(),
            next_token: 0,
        }
    }

    /// Chat seeded with a demo transcript, in `Idle`.
    #[must_use]
    pub fn with_transcript(seed: impl IntoIterator<Item = ChatMessage>) -> Self {
        let mut chat = Self::new();
        chat.transcript.extend(seed);
        chat
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ChatState {
        self.state
    }

    /// Whether a reply is pending.
    #[must_use]
    pub fn is_awaiting(&self) -> bool {
        matches!(self.state, ChatState::AwaitingReply { .. })
    }

    /// The transcript, oldest first.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Submit user text.
    ///
    /// On success appends exactly one user message, transitions to
    /// `AwaitingReply`, and returns the token the caller must schedule
    /// for delivery after [`REPLY_DELAY`]. Returns `None` (no state
    /// change, nothing appended) when the trimmed text is empty or a
    /// reply is already pending.
    pub fn submit(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_awaiting() {
            return None;
        }
        self.transcript.push(ChatMessage {
            sender: Sender::Student,
            body: trimmed.to_string(),
            stamp: None,
        });
        self.next_token += 1;
        let token = self.next_token;
        self.state = ChatState::AwaitingReply { token };
        #[cfg(feature = "tracing")]
        tracing::debug!(token, "chat awaiting simulated reply");
        Some(token)
    }

    /// Deliver the scheduled reply for `token`.
    ///
    /// Appends the canned assistant message and returns to `Idle` when
    /// the token matches the pending one; silently ignores anything
    /// else (stale or cancelled timers).
    pub fn deliver(&mut self, token: u64) -> bool {
        match self.state {
            ChatState::AwaitingReply { token: pending } if pending == token => {
                self.transcript.push(ChatMessage {
                    sender: Sender::Assistant,
                    body: CANNED_REPLY.to_string(),
                    stamp: None,
                });
                self.state = ChatState::Idle;
                true
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(token, "ignoring stale chat reply token");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_appends_user_message_and_awaits() {
        let mut chat = ChatWidget::new();
        let token = chat.submit("What is the schedule?").expect("accepted");
        assert_eq!(chat.transcript().len(), 1);
        assert_eq!(chat.transcript()[0].sender, Sender::Student);
        assert_eq!(chat.transcript()[0].body, "What is the schedule?");
        assert_eq!(chat.state(), ChatState::AwaitingReply { token });
    }

    #[test]
    fn empty_and_whitespace_submissions_rejected() {
        let mut chat = ChatWidget::new();
        assert_eq!(chat.submit(""), None);
        assert_eq!(chat.submit("   \t  "), None);
        assert!(chat.transcript().is_empty());
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn deliver_appends_reply_and_returns_to_idle() {
        let mut chat = ChatWidget::new();
        let token = chat.submit("What is the schedule?").unwrap();
        assert!(chat.deliver(token));
        assert_eq!(chat.transcript().len(), 2);
        assert_eq!(chat.transcript()[1].sender, Sender::Assistant);
        assert_eq!(chat.transcript()[1].body, CANNED_REPLY);
        assert_eq!(chat.state(), ChatState::Idle);
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut chat = ChatWidget::new();
        let token = chat.submit("hi").unwrap();
        assert!(!chat.deliver(token + 1));
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.is_awaiting());
        // Deliver twice: the second is stale after the state returned to Idle.
        assert!(chat.deliver(token));
        assert!(!chat.deliver(token));
        assert_eq!(chat.transcript().len(), 2);
    }

    #[test]
    fn submit_rejected_while_awaiting() {
        let mut chat = ChatWidget::new();
        chat.submit("first").unwrap();
        assert_eq!(chat.submit("second"), None);
        assert_eq!(chat.transcript().len(), 1);
    }

    #[test]
    fn input_is_trimmed() {
        let mut chat = ChatWidget::new();
        chat.submit("  spaced out  ").unwrap();
        assert_eq!(chat.transcript()[0].body, "spaced out");
    }

    #[test]
    fn seeded_transcript_preserved() {
        let seed = [
            ChatMessage {
                sender: Sender::Student,
                body: "When is the next physics exam?".into(),
                stamp: Some("10:30 AM"),
            },
            ChatMessage {
                sender: Sender::Assistant,
                body: "Friday at 9:00 AM.".into(),
                stamp: Some("10:31 AM"),
            },
        ];
        let chat = ChatWidget::with_transcript(seed.clone());
        assert_eq!(chat.transcript(), &seed);
        assert_eq!(chat.state(), ChatState::Idle);
    }
}

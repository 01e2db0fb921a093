//! Trigger filter - stateless classification of inbound messages

/// Action derived from an inbound message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Message is not actionable
    NoAction,
    /// Run the rescue servo
    RunServo,
    /// Capture a snapshot
    RunSnapshot,
}

/// Static inputs to classification: the bot's own identity and the optional
/// chat restriction (0 = any chat is actionable).
#[derive(Debug, Clone, Copy)]
pub struct TriggerFilter {
    /// The bot's own user id; self-originated messages are never actionable
    pub self_id: u64,
    /// Restrict plain-text triggers to this chat (0 = unrestricted)
    pub rescue_chat_id: i64,
}

impl TriggerFilter {
    /// Classify one message. Pure: same inputs, same trigger.
    pub fn classify(&self, text: &str, chat_id: i64, sender_id: Option<u64>) -> Trigger {
        if sender_id == Some(self.self_id) {
            return Trigger::NoAction;
        }

        if self.rescue_chat_id != 0 && chat_id != self.rescue_chat_id {
            return Trigger::NoAction;
        }

        match text.trim().to_lowercase().as_str() {
            "rescue" | "!rescue" => Trigger::RunServo,
            "snapshot" | "!snapshot" => Trigger::RunSnapshot,
            _ => Trigger::NoAction,
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Who authored a message. The wire encodes this as the `isUser` boolean
/// (`true` means the customer wrote it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    Customer,
    Agent,
}

impl Author {
    pub fn from_is_user(is_user: bool) -> Self {
        if is_user { Self::Customer } else { Self::Agent }
    }

    pub fn is_user(self) -> bool {
        self == Self::Customer
    }
}

/// A single chat message. Immutable after creation; `id` is the sole
/// de-duplication key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
}

impl ChatMessage {
    /// Local greeting bubble shown after the name prompt. The id is keyed
    /// by name: re-submitting the same name collapses under the de-dup
    /// rule, while a changed name still gets its own greeting.
    pub fn greeting(display_name: &str) -> Self {
        Self {
            id: format!("welcome:{display_name}"),
            text: format!("Hello {display_name}, how can I assist you today?"),
            author: Author::Agent,
        }
    }
}

/// The in-memory transcript the widget renders: an insertion-ordered log
/// with idempotent insertion keyed by message id.
///
/// Every delivery path (history fetch, socket push, optimistic local echo)
/// funnels through [`ChatState::append`], so a message id is rendered at
/// most once no matter how many times it arrives.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// True while a history fetch is outstanding on the resume path. Pushes
    /// that race the fetch are parked until it resolves.
    pub history_pending: bool,
    parked: Vec<ChatMessage>,
}

impl ChatState {
    /// Insert `msg` at the tail unless an entry with the same id already
    /// exists. The first insertion for an id always wins.
    pub fn append(&mut self, msg: ChatMessage) {
        if self.messages.iter().any(|m| m.id == msg.id) {
            return;
        }
        self.messages.push(msg);
    }

    /// Merge a batch of messages in order through the de-duplicating
    /// [`append`](Self::append) path. On an empty buffer this is a plain
    /// seed; on a non-empty buffer existing entries are never duplicated or
    /// dropped.
    pub fn seed(&mut self, msgs: Vec<ChatMessage>) {
        for msg in msgs {
            self.append(msg);
        }
    }

    /// Accept an inbound push. While a history fetch is outstanding the
    /// message is parked; otherwise it goes straight into the buffer.
    pub fn push_inbound(&mut self, msg: ChatMessage) {
        if self.history_pending {
            self.parked.push(msg);
        } else {
            self.append(msg);
        }
    }

    /// Mark the start of a history fetch on the resume path.
    pub fn begin_history(&mut self) {
        self.history_pending = true;
    }

    /// Apply a resolved history fetch: the transcript is seeded first, then
    /// any pushes that arrived during the fetch replay through `append`, so
    /// ordering is deterministic and nothing is lost or duplicated.
    pub fn finish_history(&mut self, transcript: Vec<ChatMessage>) {
        self.history_pending = false;
        self.seed(transcript);
        let parked = std::mem::take(&mut self.parked);
        for msg in parked {
            self.append(msg);
        }
    }

    /// History fetch failed: present an empty transcript. Parked pushes are
    /// still replayed so nothing delivered live is lost.
    pub fn history_unavailable(&mut self) {
        self.finish_history(Vec::new());
    }

    /// Empty the buffer. Restart only.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.parked.clear();
        self.history_pending = false;
    }
}

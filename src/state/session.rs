#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The durable (display name, session id) pair persisted across reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub display_name: String,
    pub session_id: String,
}

/// Bootstrap phase of the chat session.
///
/// `Closed` is both the initial phase and the one re-entered on unmount or
/// restart; it is never terminal. The resume path goes through `Resuming`,
/// the new-session path through `AwaitingName`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Closed,
    Resuming,
    AwaitingName,
    Active,
}

/// Live connection status of the transport channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// What the widget must do after an open action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenAction {
    /// Stored keys found: fetch history for this session id (exactly once)
    /// and attach the channel.
    Resume { session_id: String },
    /// No stored session: block on the name prompt, no network activity.
    PromptForName,
}

/// Claim on one session-creation attempt, handed out by
/// [`SessionState::begin_create`]. The outcome of the network call must
/// present its ticket back; a ticket from a superseded attempt no longer
/// applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateTicket(u64);

/// Session bootstrap state machine.
///
/// Transitions are plain methods so the whole lifecycle is host-testable;
/// the widget owns the side effects (network calls, storage writes) and
/// performs them according to the returned instructions.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub display_name: Option<String>,
    pub session_id: Option<String>,
    pub connection: ConnectionStatus,
    create_pending: bool,
    create_epoch: u64,
}

impl SessionState {
    /// Open the chat window from `Closed`, consulting the stored session.
    pub fn open(&mut self, stored: Option<StoredSession>) -> OpenAction {
        match stored {
            Some(s) => {
                self.phase = SessionPhase::Resuming;
                self.display_name = Some(s.display_name);
                self.session_id = Some(s.session_id.clone());
                OpenAction::Resume { session_id: s.session_id }
            }
            None => {
                self.phase = SessionPhase::AwaitingName;
                OpenAction::PromptForName
            }
        }
    }

    /// Record the user's display name while awaiting it. Returns `false`
    /// for blank input, which keeps the prompt up.
    pub fn submit_name(&mut self, name: &str) -> bool {
        if self.phase != SessionPhase::AwaitingName {
            return false;
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.display_name = Some(trimmed.to_owned());
        true
    }

    /// Claim the one allowed session-creation call for the first send.
    ///
    /// A claim is handed out at most once per attempt: repeated sends while
    /// the creation request is in flight, sends after the session exists,
    /// and sends before a name was given all return `None`. Closing the
    /// widget abandons the attempt; its ticket goes stale and the outcome
    /// of the in-flight call is rejected, even if a fresh attempt has been
    /// claimed in the meantime.
    pub fn begin_create(&mut self) -> Option<CreateTicket> {
        if self.create_pending || self.session_id.is_some() || self.display_name.is_none() {
            return None;
        }
        self.create_pending = true;
        self.create_epoch += 1;
        Some(CreateTicket(self.create_epoch))
    }

    fn ticket_is_live(&self, ticket: CreateTicket) -> bool {
        self.create_pending && ticket.0 == self.create_epoch
    }

    /// The session-creation call succeeded: enter `Active` and hand back the
    /// pair the caller must persist. A stale ticket returns `None` and
    /// leaves the state untouched.
    pub fn create_succeeded(
        &mut self,
        ticket: CreateTicket,
        session_id: String,
    ) -> Option<StoredSession> {
        if !self.ticket_is_live(ticket) {
            return None;
        }
        let display_name = self.display_name.clone()?;
        self.create_pending = false;
        self.session_id = Some(session_id.clone());
        self.phase = SessionPhase::Active;
        Some(StoredSession { display_name, session_id })
    }

    /// The session-creation call failed: stay in `AwaitingName` so the user
    /// can retry. The message was not sent. Returns `false` for a stale
    /// ticket, which leaves any newer live attempt untouched.
    pub fn create_failed(&mut self, ticket: CreateTicket) -> bool {
        if !self.ticket_is_live(ticket) {
            return false;
        }
        self.create_pending = false;
        true
    }

    /// The resume path completed (history applied, channel attached).
    pub fn resumed(&mut self) {
        if self.phase == SessionPhase::Resuming {
            self.phase = SessionPhase::Active;
        }
    }

    /// Unmount: back to `Closed` with the channel down. The display name and
    /// session id are retained so the next open resumes.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Closed;
        self.connection = ConnectionStatus::Disconnected;
        self.create_pending = false;
    }

    /// Explicit restart: drop everything, including the resumable identity.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    /// True once a send can go down the steady-state `Active` path.
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }
}

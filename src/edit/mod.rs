//! The single in-progress rename.

/// Draft state for renaming one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: String,
    pub draft: String,
}

/// What committing the current session would do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRename {
    /// Nothing is being edited.
    Idle,
    /// The draft is blank; nothing to send.
    Blank,
    /// The draft equals the current username.
    Unchanged,
    /// Send `rename(current, new_name)`.
    Rename { current: String, new_name: String },
}

/// Result of committing an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The backend accepted the rename; the session is closed.
    Renamed,
    /// The draft matched the current name; the session is closed unsent.
    Unchanged,
    /// The draft was blank; the session stays open.
    Blank,
    /// There was no session to commit.
    NoSession,
}

/// Holds at most one [`EditSession`].
#[derive(Debug, Clone, Default)]
pub struct EditSlot {
    session: Option<EditSession>,
}

impl EditSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `username`, silently abandoning any other session.
    pub fn begin(&mut self, username: &str) {
        self.session = Some(EditSession {
            target: username.to_string(),
            draft: username.to_string(),
        });
    }

    /// Update the draft. Returns `false` if nothing is being edited.
    pub fn set_draft(&mut self, value: impl Into<String>) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.draft = value.into();
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn current(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self, username: &str) -> bool {
        self.session.as_ref().is_some_and(|s| s.target == username)
    }

    pub fn pending(&self) -> PendingRename {
        let Some(session) = &self.session else {
            return PendingRename::Idle;
        };
        let draft = session.draft.trim();
        if draft.is_empty() {
            PendingRename::Blank
        } else if draft == session.target {
            PendingRename::Unchanged
        } else {
            PendingRename::Rename {
                current: session.target.clone(),
                new_name: draft.to_string(),
            }
        }
    }
}

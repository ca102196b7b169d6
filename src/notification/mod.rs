//! Transient notifications with cancel-on-supersede expiry.
//!
//! At most one notification is live. Each one arms a single expiry task;
//! posting a newer notification aborts the pending task before arming its
//! own, so only the most recent timer ever clears the slot.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tracing::debug;

/// Default lifetime of a notification.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    /// Bumped on every post; an expiry only clears the generation it armed.
    generation: u64,
    timer: Option<AbortHandle>,
}

/// Holder of the single live notification.
///
/// Expiry runs on the ambient tokio runtime. Without one, notifications
/// persist until superseded or dismissed.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Replace the live notification and arm its expiry.
    pub fn notify(&self, notification: Notification) {
        let mut slot = self.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        debug!(text = %notification.text, kind = ?notification.kind, "notification posted");
        slot.current = Some(notification);

        let generation = slot.generation;
        let ttl = self.ttl;
        let shared = Arc::clone(&self.slot);
        slot.timer = Handle::try_current().ok().map(|runtime| {
            runtime
                .spawn(async move {
                    tokio::time::sleep(ttl).await;
                    let mut slot = shared.lock().unwrap_or_else(PoisonError::into_inner);
                    if slot.generation == generation {
                        slot.current = None;
                        slot.timer = None;
                    }
                })
                .abort_handle()
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(Notification::success(text));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(Notification::error(text));
    }

    /// The live notification, if it has not expired.
    pub fn current(&self) -> Option<Notification> {
        self.lock().current.clone()
    }

    /// Clear immediately and cancel the pending expiry.
    pub fn dismiss(&self) {
        let mut slot = self.lock();
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = None;
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

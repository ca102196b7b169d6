//! Directory state store: the client's cached snapshot of the backend.
//!
//! The profile list is only ever replaced wholesale by [`DirectoryStore::refresh`];
//! writes elsewhere in the crate are followed by a refresh instead of local
//! patching.
//!
//! ## Overlapping refreshes
//!
//! Each refresh takes a ticket from a monotonic counter. A response is
//! applied only if no later-issued refresh has been applied already, so a
//! slow stale response cannot overwrite fresher data. `loading` stays set
//! while any refresh is in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::client::{ClientError, DirectoryClient};
use crate::notification::{Notification, Notifier};
use crate::profile::Profile;

pub const LOAD_PROFILES_FAILED: &str = "Failed to load profiles";

#[derive(Default)]
struct StoreState {
    profiles: Vec<Profile>,
    interests: Vec<String>,
    in_flight: usize,
    issued: u64,
    applied: u64,
}

/// Profiles, interest tags, loading flag and the live notification.
pub struct DirectoryStore<C> {
    client: Arc<C>,
    state: Mutex<StoreState>,
    notifier: Notifier,
}

impl<C: DirectoryClient> DirectoryStore<C> {
    pub fn new(client: C) -> Self {
        Self::with_notifier(Arc::new(client), Notifier::default())
    }

    pub fn with_notifier(client: Arc<C>, notifier: Notifier) -> Self {
        Self {
            client,
            state: Mutex::new(StoreState::default()),
            notifier,
        }
    }

    /// Reload the profile list.
    ///
    /// On failure the current list is kept and an error notification is
    /// posted. The loading flag is cleared either way, even if this future
    /// is dropped before completing.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let guard = InFlight::start(self);
        let ticket = guard.ticket;
        let outcome = self.client.list_profiles().await;
        drop(guard);

        match outcome {
            Ok(profiles) => {
                let mut state = self.lock();
                if ticket > state.applied {
                    debug!(ticket, count = profiles.len(), "profiles refreshed");
                    state.profiles = profiles;
                    state.applied = ticket;
                } else {
                    debug!(ticket, applied = state.applied, "discarding stale profile list");
                }
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "profile refresh failed");
                self.notifier.error(LOAD_PROFILES_FAILED);
                Err(err)
            }
        }
    }

    /// Reload the interest tags. Failures are logged and otherwise ignored.
    pub async fn refresh_interests(&self) {
        match self.client.list_interests().await {
            Ok(interests) => {
                debug!(count = interests.len(), "interests refreshed");
                self.lock().interests = interests;
            }
            Err(err) => warn!(error = %err, "failed to load interests"),
        }
    }

    /// Post a notification, superseding the current one.
    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Snapshot of the cached profiles.
    pub fn profiles(&self) -> Vec<Profile> {
        self.lock().profiles.clone()
    }

    /// Borrow the cached profiles for the duration of `f`.
    pub fn with_profiles<R>(&self, f: impl FnOnce(&[Profile]) -> R) -> R {
        f(&self.lock().profiles)
    }

    pub fn profile_count(&self) -> usize {
        self.lock().profiles.len()
    }

    pub fn interests(&self) -> Vec<String> {
        self.lock().interests.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().in_flight > 0
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks one refresh as in flight until dropped.
struct InFlight<'a> {
    state: &'a Mutex<StoreState>,
    ticket: u64,
}

impl<'a> InFlight<'a> {
    fn start<C: DirectoryClient>(store: &'a DirectoryStore<C>) -> Self {
        let mut state = store.lock();
        state.in_flight += 1;
        state.issued += 1;
        Self {
            state: &store.state,
            ticket: state.issued,
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

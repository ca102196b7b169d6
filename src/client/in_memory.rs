//! In-process backend for testing and development.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{ClientError, DirectoryClient};
use crate::profile::Profile;
use crate::scene::Role;
use crate::validation::MAX_AGE;

/// Interest tags served when none are configured.
pub const DEFAULT_INTERESTS: [&str; 5] = ["Hiking", "Gaming", "Reading", "Cooking", "Fitness"];

/// A recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProfiles,
    ListInterests,
    CreateProfile(String),
    RenameProfile { current: String, new_name: String },
    DeleteProfile(String),
    SetRole(Role),
}

struct Backend {
    profiles: Vec<Profile>,
    interests: Vec<String>,
    role: Option<Role>,
    calls: Vec<Call>,
    offline: bool,
    fail_next: Option<ClientError>,
    delay_next: Option<Duration>,
}

/// In-memory implementation of the directory contract.
///
/// Usernames are matched case-insensitively for rename, delete and
/// uniqueness. Every call is logged before it is served, including calls
/// that fail. Clone-friendly via Arc, so a test can keep a handle while the
/// store owns another.
#[derive(Clone)]
pub struct InMemoryDirectory {
    backend: Arc<Mutex<Backend>>,
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDirectory {
    /// Empty directory with the default interest tags.
    pub fn new() -> Self {
        Self::with_profiles(Vec::new())
    }

    /// Directory seeded with `profiles`.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        Self {
            backend: Arc::new(Mutex::new(Backend {
                profiles,
                interests: DEFAULT_INTERESTS.iter().map(|s| s.to_string()).collect(),
                role: None,
                calls: Vec::new(),
                offline: false,
                fail_next: None,
                delay_next: None,
            })),
        }
    }

    /// Replace the served interest tags.
    pub fn set_interests<I, S>(&self, interests: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lock().interests = interests.into_iter().map(Into::into).collect();
    }

    /// While offline every call fails with [`ClientError::Network`].
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Fail the next call (of any kind) with `err`.
    pub fn fail_next(&self, err: ClientError) {
        self.lock().fail_next = Some(err);
    }

    /// Hold the response to the next call for `delay`. The call's outcome is
    /// computed before the pause.
    pub fn delay_next(&self, delay: Duration) {
        self.lock().delay_next = Some(delay);
    }

    /// Mutate the stored profiles directly, bypassing the call log.
    pub fn seed(&self, profile: Profile) {
        self.lock().profiles.push(profile);
    }

    /// Snapshot of the stored profiles.
    pub fn profiles(&self) -> Vec<Profile> {
        self.lock().profiles.clone()
    }

    /// The last role successfully set.
    pub fn role(&self) -> Option<Role> {
        self.lock().role
    }

    /// Every call served so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Number of logged calls matching `predicate`.
    pub fn count_calls(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| predicate(*c)).count()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.backend.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Log `call`, apply injected failures, then run `op` against the state.
    fn serve<T>(
        &self,
        call: Call,
        op: impl FnOnce(&mut Backend) -> Result<T, ClientError>,
    ) -> (Result<T, ClientError>, Option<Duration>) {
        let mut backend = self.lock();
        backend.calls.push(call);
        let delay = backend.delay_next.take();
        if backend.offline {
            return (
                Err(ClientError::Network("backend unreachable".into())),
                delay,
            );
        }
        if let Some(err) = backend.fail_next.take() {
            return (Err(err), delay);
        }
        (op(&mut backend), delay)
    }
}

async fn respond<T>(
    (outcome, delay): (Result<T, ClientError>, Option<Duration>),
) -> Result<T, ClientError> {
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    outcome
}

impl Backend {
    fn position(&self, username: &str) -> Option<usize> {
        self.profiles
            .iter()
            .position(|p| p.username.eq_ignore_ascii_case(username))
    }
}

const BAD_REQUEST: ClientError = ClientError::Rejected { status: 400 };
const NOT_FOUND: ClientError = ClientError::Rejected { status: 404 };
const CONFLICT: ClientError = ClientError::Rejected { status: 409 };

impl DirectoryClient for InMemoryDirectory {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ClientError> {
        let served = self.serve(Call::ListProfiles, |b| Ok(b.profiles.clone()));
        respond(served).await
    }

    async fn list_interests(&self) -> Result<Vec<String>, ClientError> {
        let served = self.serve(Call::ListInterests, |b| Ok(b.interests.clone()));
        respond(served).await
    }

    async fn create_profile(&self, profile: &Profile) -> Result<(), ClientError> {
        let served = self.serve(Call::CreateProfile(profile.username.clone()), |b| {
            if profile.username.trim().is_empty() || profile.interest.trim().is_empty() {
                return Err(BAD_REQUEST);
            }
            if profile.age > MAX_AGE {
                return Err(BAD_REQUEST);
            }
            if b.position(&profile.username).is_some() {
                return Err(CONFLICT);
            }
            b.profiles.push(profile.clone());
            Ok(())
        });
        respond(served).await
    }

    async fn rename_profile(&self, current: &str, new_name: &str) -> Result<(), ClientError> {
        let call = Call::RenameProfile {
            current: current.to_string(),
            new_name: new_name.to_string(),
        };
        let served = self.serve(call, |b| {
            if new_name.trim().is_empty() {
                return Err(BAD_REQUEST);
            }
            let index = b.position(current).ok_or(NOT_FOUND)?;
            if b.position(new_name).is_some_and(|other| other != index) {
                return Err(CONFLICT);
            }
            b.profiles[index].username = new_name.to_string();
            Ok(())
        });
        respond(served).await
    }

    async fn delete_profile(&self, username: &str) -> Result<(), ClientError> {
        let served = self.serve(Call::DeleteProfile(username.to_string()), |b| {
            let index = b.position(username).ok_or(NOT_FOUND)?;
            b.profiles.remove(index);
            Ok(())
        });
        respond(served).await
    }

    async fn set_role(&self, role: Role) -> Result<(), ClientError> {
        let served = self.serve(Call::SetRole(role), |b| {
            b.role = Some(role);
            Ok(())
        });
        respond(served).await
    }
}

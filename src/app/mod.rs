//! The user-action layer over the store, scenes and edit session.
//!
//! Owns the scene controller, the form drafts and the edit slot, and drives
//! the store and client in response to user actions. Every successful write
//! is followed by a full profile refresh.
//!
//! ## Example
//!
//! ```ignore
//! use profile_directory::{DirectoryApp, InMemoryDirectory};
//!
//! let mut app = DirectoryApp::new(InMemoryDirectory::new());
//! app.enter_as_user().await?;
//!
//! app.draft_mut().set_username("joe");
//! app.draft_mut().set_age("30");
//! app.draft_mut().set_interest("Gaming");
//! app.create_profile().await?;
//!
//! assert_eq!(app.search_view().len(), 1);
//! ```

mod messages;

pub use messages::*;

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::DirectoryClient;
use crate::config::DirectoryConfig;
use crate::edit::{CommitOutcome, EditSession, EditSlot, PendingRename};
use crate::error::AppError;
use crate::notification::{Notification, Notifier};
use crate::profile::{MatchFilter, NewProfileDraft, Profile, SearchFilter};
use crate::query;
use crate::scene::{Operation, Role, Scene, SceneAction, SceneController, Transition};
use crate::store::DirectoryStore;
use crate::validation;

/// What the admin dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    pub total_profiles: usize,
    /// Role last acknowledged by the backend.
    pub role: Role,
    pub profiles: Vec<Profile>,
}

pub struct DirectoryApp<C> {
    store: DirectoryStore<C>,
    scenes: SceneController,
    acknowledged_role: Role,
    edit: EditSlot,
    draft: NewProfileDraft,
    search: SearchFilter,
    match_filter: MatchFilter,
}

#[cfg(feature = "http")]
impl DirectoryApp<crate::client::HttpDirectoryClient> {
    /// App talking to the REST backend described by `config`.
    pub fn connect(config: &DirectoryConfig) -> Result<Self, crate::client::ClientError> {
        let client = crate::client::HttpDirectoryClient::new(config)?;
        Ok(Self::with_config(client, config))
    }
}

impl<C: DirectoryClient> DirectoryApp<C> {
    pub fn new(client: C) -> Self {
        Self::with_config(client, &DirectoryConfig::default())
    }

    pub fn with_config(client: C, config: &DirectoryConfig) -> Self {
        let notifier = Notifier::new(config.notification_ttl());
        Self::from_store(DirectoryStore::with_notifier(Arc::new(client), notifier))
    }

    pub fn from_store(store: DirectoryStore<C>) -> Self {
        Self {
            store,
            scenes: SceneController::new(),
            acknowledged_role: Role::default(),
            edit: EditSlot::new(),
            draft: NewProfileDraft::new(),
            search: SearchFilter::default(),
            match_filter: MatchFilter::new(),
        }
    }

    pub fn store(&self) -> &DirectoryStore<C> {
        &self.store
    }

    pub fn scene(&self) -> Scene {
        self.scenes.scene()
    }

    /// Role last acknowledged by the backend. Starts as `guest`.
    pub fn acknowledged_role(&self) -> Role {
        self.acknowledged_role
    }

    pub fn notification(&self) -> Option<Notification> {
        self.store.notification()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    pub fn interests(&self) -> Vec<String> {
        self.store.interests()
    }

    // ------------------------------------------------------------------
    // Scenes
    // ------------------------------------------------------------------

    pub async fn enter_as_user(&mut self) -> Result<Transition, AppError> {
        self.transition(SceneAction::EnterAsUser).await
    }

    pub async fn enter_as_admin(&mut self) -> Result<Transition, AppError> {
        self.transition(SceneAction::EnterAsAdmin).await
    }

    /// Return to the login scene. Abandons any open edit session; never
    /// contacts the backend.
    pub fn logout(&mut self) -> Result<Transition, AppError> {
        let transition = self.scenes.apply(SceneAction::Logout)?;
        if !transition.is_noop() {
            info!(from = %transition.from, "logged out");
            self.edit.cancel();
        }
        Ok(transition)
    }

    async fn transition(&mut self, action: SceneAction) -> Result<Transition, AppError> {
        let transition = self.scenes.apply(action)?;
        if transition.is_noop() {
            return Ok(transition);
        }
        info!(from = %transition.from, to = %transition.to, "scene changed");

        if let Some(role) = transition.role {
            self.advertise_role(role).await;
        }
        if transition.reload {
            let _ = self.store.refresh().await;
            self.store.refresh_interests().await;
        }
        Ok(transition)
    }

    /// The scene has already changed by the time this runs; a failure only
    /// produces a notification.
    async fn advertise_role(&mut self, role: Role) {
        match self.store.client().set_role(role).await {
            Ok(()) => {
                self.acknowledged_role = role;
                self.store.notify(Notification::success(role_switched(role)));
            }
            Err(err) => {
                warn!(%role, error = %err, "backend did not accept role");
                self.store.notify(Notification::error(ROLE_SWITCH_FAILED));
            }
        }
    }

    fn ensure(&self, operation: Operation) -> Result<(), AppError> {
        if self.scenes.permits(operation) {
            Ok(())
        } else {
            Err(AppError::NotPermitted {
                operation,
                scene: self.scenes.scene(),
            })
        }
    }

    // ------------------------------------------------------------------
    // Drafts and filters
    // ------------------------------------------------------------------

    pub fn draft(&self) -> &NewProfileDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NewProfileDraft {
        &mut self.draft
    }

    pub fn search_filter(&self) -> &SearchFilter {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search.text = text.into();
    }

    pub fn match_filter(&self) -> &MatchFilter {
        &self.match_filter
    }

    pub fn match_filter_mut(&mut self) -> &mut MatchFilter {
        &mut self.match_filter
    }

    // ------------------------------------------------------------------
    // Views. Empty outside the scene that shows them.
    // ------------------------------------------------------------------

    /// Browse tab: profiles matching the search filter.
    pub fn search_view(&self) -> Vec<Profile> {
        if !self.scenes.permits(Operation::Browse) {
            return Vec::new();
        }
        self.store.with_profiles(|profiles| {
            query::search(profiles, &self.search)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    /// Match tab: profiles in the filter's age range, minus the caller.
    pub fn match_view(&self) -> Vec<Profile> {
        if !self.scenes.permits(Operation::Match) {
            return Vec::new();
        }
        self.store.with_profiles(|profiles| {
            query::matches(profiles, &self.match_filter)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn admin_view(&self) -> Option<AdminView> {
        if !self.scenes.permits(Operation::ListAll) {
            return None;
        }
        let profiles = self.store.profiles();
        Some(AdminView {
            total_profiles: profiles.len(),
            role: self.acknowledged_role,
            profiles,
        })
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Manual reload of the profile list.
    pub async fn refresh(&self) -> Result<(), AppError> {
        self.ensure(Operation::Refresh)?;
        self.store.refresh().await?;
        Ok(())
    }

    /// Submit the "Join" form.
    ///
    /// Validation failures are reported as notifications and never reach
    /// the backend. On success the draft is cleared and profiles reloaded.
    pub async fn create_profile(&mut self) -> Result<(), AppError> {
        self.ensure(Operation::Create)?;
        let profile = match validation::validate_new_profile(&self.draft) {
            Ok(profile) => profile,
            Err(err) => {
                self.store.notify(Notification::error(err.to_string()));
                return Err(err.into());
            }
        };

        if let Err(err) = self.store.client().create_profile(&profile).await {
            warn!(username = %profile.username, error = %err, "create failed");
            self.store.notify(Notification::error(CREATE_FAILED));
            return Err(err.into());
        }

        info!(username = %profile.username, "profile created");
        self.store.notify(Notification::success(CREATED));
        self.draft.clear();
        let _ = self.store.refresh().await;
        Ok(())
    }

    /// Open a rename session for `username`, abandoning any other one.
    pub fn begin_edit(&mut self, username: &str) -> Result<(), AppError> {
        self.ensure(Operation::Rename)?;
        self.edit.begin(username);
        Ok(())
    }

    pub fn set_rename_draft(&mut self, value: impl Into<String>) -> bool {
        self.edit.set_draft(value)
    }

    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.current()
    }

    /// Send the pending rename. A failed rename leaves the session open.
    pub async fn commit_edit(&mut self) -> Result<CommitOutcome, AppError> {
        self.ensure(Operation::Rename)?;
        let (current, new_name) = match self.edit.pending() {
            PendingRename::Idle => return Ok(CommitOutcome::NoSession),
            PendingRename::Blank => return Ok(CommitOutcome::Blank),
            PendingRename::Unchanged => {
                self.edit.cancel();
                return Ok(CommitOutcome::Unchanged);
            }
            PendingRename::Rename { current, new_name } => (current, new_name),
        };

        if let Err(err) = self.store.client().rename_profile(&current, &new_name).await {
            warn!(%current, %new_name, error = %err, "rename failed");
            self.store.notify(Notification::error(RENAME_FAILED));
            return Err(err.into());
        }

        info!(%current, %new_name, "profile renamed");
        self.edit.cancel();
        self.store.notify(Notification::success(RENAMED));
        let _ = self.store.refresh().await;
        Ok(CommitOutcome::Renamed)
    }

    pub async fn delete_profile(&mut self, username: &str) -> Result<(), AppError> {
        self.ensure(Operation::Delete)?;
        if let Err(err) = self.store.client().delete_profile(username).await {
            warn!(username, error = %err, "delete failed");
            self.store.notify(Notification::error(DELETE_FAILED));
            return Err(err.into());
        }

        info!(username, "profile deleted");
        self.store.notify(Notification::success(DELETED));
        let _ = self.store.refresh().await;
        Ok(())
    }
}

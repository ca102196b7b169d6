//! Client-side state for a profile directory.
//!
//! Users browse, create, rename and delete profiles and look for others in
//! an age range. Three mutually exclusive scenes (login, user, admin) decide
//! which operations are available; entering a scene advertises a role to the
//! backend and reloads the directory.
//!
//! The pieces, leaves first:
//!
//! - [`validation`] — age input gate and form validation.
//! - [`DirectoryClient`] — the backend contract, with [`HttpDirectoryClient`]
//!   and [`InMemoryDirectory`] implementations.
//! - [`DirectoryStore`] — cached profiles, interests, loading flag, notification.
//! - [`query`] — search and match views.
//! - [`SceneController`] — the login/user/admin state machine.
//! - [`EditSlot`] — the single in-progress rename.
//! - [`DirectoryApp`] — user actions wired over all of the above.

mod app;
mod client;
mod config;
mod edit;
mod error;
mod notification;
mod profile;
pub mod query;
mod scene;
mod store;
pub mod validation;

pub use app::{
    role_switched, AdminView, DirectoryApp, CREATED, CREATE_FAILED, DELETED, DELETE_FAILED,
    RENAMED, RENAME_FAILED, ROLE_SWITCH_FAILED,
};
pub use client::{Call, ClientError, DirectoryClient, InMemoryDirectory, DEFAULT_INTERESTS};
#[cfg(feature = "http")]
pub use client::HttpDirectoryClient;
pub use config::{ConfigError, DirectoryConfig};
pub use edit::{CommitOutcome, EditSession, EditSlot, PendingRename};
pub use error::AppError;
pub use notification::{Notification, NotificationKind, Notifier};
pub use profile::{MatchFilter, NewProfileDraft, Profile, SearchFilter};
pub use scene::{Operation, Role, Scene, SceneAction, SceneController, SceneError, Transition};
pub use store::{DirectoryStore, LOAD_PROFILES_FAILED};
pub use validation::{is_valid_age_input, ValidationError};

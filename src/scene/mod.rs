//! Scene controller. Tracks which top-level view is active and which role the
//! backend is told about.
//!
//! ```text
//!            EnterAsUser                 EnterAsAdmin
//!   user <────────────── login ──────────────> admin
//!     └────── Logout ─────>  <────── Logout ─────┘
//! ```
//!
//! Leaving `login` is the only transition that asks for a reload and a role
//! change. Re-entering the current scene is a no-op.

mod error;

pub use error::SceneError;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three mutually exclusive views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scene {
    #[default]
    Login,
    User,
    Admin,
}

/// Advisory access label sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guest,
    Admin,
}

/// User intents that move between scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneAction {
    EnterAsUser,
    EnterAsAdmin,
    Logout,
}

/// Things a user can do, gated by the active scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Browse,
    Create,
    Rename,
    Match,
    ListAll,
    Delete,
    Refresh,
}

/// Outcome of applying a [`SceneAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Scene,
    pub to: Scene,
    /// Role to advertise to the backend, if the transition changes it.
    pub role: Option<Role>,
    /// Whether profiles and interests must be reloaded.
    pub reload: bool,
}

impl Transition {
    fn stay(scene: Scene) -> Self {
        Self {
            from: scene,
            to: scene,
            role: None,
            reload: false,
        }
    }

    /// True if the scene did not change.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

impl Scene {
    /// The role advertised while this scene is active.
    pub fn role(self) -> Option<Role> {
        match self {
            Scene::Login => None,
            Scene::User => Some(Role::Guest),
            Scene::Admin => Some(Role::Admin),
        }
    }

    pub fn permits(self, operation: Operation) -> bool {
        use Operation::*;
        match self {
            Scene::Login => false,
            Scene::User => matches!(operation, Browse | Create | Rename | Match | Refresh),
            Scene::Admin => matches!(operation, ListAll | Delete | Refresh),
        }
    }
}

/// Finite-state owner of the active scene. [`SceneController::apply`] is the
/// only way to change it.
#[derive(Debug, Clone, Default)]
pub struct SceneController {
    scene: Scene,
}

impl SceneController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// Role for the active scene (`None` on the login screen).
    pub fn role(&self) -> Option<Role> {
        self.scene.role()
    }

    pub fn permits(&self, operation: Operation) -> bool {
        self.scene.permits(operation)
    }

    /// Apply `action`, returning what the caller must do about it.
    ///
    /// Switching directly between `user` and `admin` is refused; the user has
    /// to log out first.
    pub fn apply(&mut self, action: SceneAction) -> Result<Transition, SceneError> {
        let from = self.scene;
        let to = match action {
            SceneAction::EnterAsUser => Scene::User,
            SceneAction::EnterAsAdmin => Scene::Admin,
            SceneAction::Logout => Scene::Login,
        };

        if from == to {
            return Ok(Transition::stay(from));
        }
        if from != Scene::Login && to != Scene::Login {
            return Err(SceneError::InvalidTransition { from, action });
        }

        self.scene = to;
        let entering = from == Scene::Login;
        Ok(Transition {
            from,
            to,
            role: if entering { to.role() } else { None },
            reload: entering,
        })
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scene::Login => write!(f, "login"),
            Scene::User => write!(f, "user"),
            Scene::Admin => write!(f, "admin"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Guest => write!(f, "guest"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Browse => "browse",
            Operation::Create => "create",
            Operation::Rename => "rename",
            Operation::Match => "match",
            Operation::ListAll => "list all",
            Operation::Delete => "delete",
            Operation::Refresh => "refresh",
        };
        f.write_str(name)
    }
}

use std::fmt;

use super::{Scene, SceneAction};

/// Error type for scene transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// `action` is not defined from `from`.
    InvalidTransition { from: Scene, action: SceneAction },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidTransition { from, action } => {
                write!(f, "cannot apply {:?} from the {} scene", action, from)
            }
        }
    }
}

impl std::error::Error for SceneError {}

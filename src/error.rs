use std::error::Error;
use std::fmt;

use crate::client::ClientError;
use crate::scene::{Operation, Scene, SceneError};
use crate::validation::ValidationError;

/// Error type for user actions on a [`DirectoryApp`](crate::DirectoryApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The active scene does not offer this operation. Nothing was sent.
    NotPermitted { operation: Operation, scene: Scene },
    /// A form field failed client-side validation. Nothing was sent.
    Validation(ValidationError),
    /// The backend call failed.
    Client(ClientError),
    /// The requested scene change is not defined.
    Scene(SceneError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotPermitted { operation, scene } => {
                write!(f, "{} is not available in the {} scene", operation, scene)
            }
            AppError::Validation(e) => write!(f, "validation failed: {}", e),
            AppError::Client(e) => write!(f, "{}", e),
            AppError::Scene(e) => write!(f, "{}", e),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Client(e) => Some(e),
            AppError::Scene(e) => Some(e),
            AppError::NotPermitted { .. } => None,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::Client(err)
    }
}

impl From<SceneError> for AppError {
    fn from(err: SceneError) -> Self {
        AppError::Scene(err)
    }
}

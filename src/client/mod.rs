//! Remote directory client. The backend contract the UI state talks to.
//!
//! All operations are asynchronous and may fail. Write operations only
//! report success or failure; callers follow every successful write with a
//! full [`DirectoryClient::list_profiles`] rather than patching local state.
//!
//! ## Implementations
//!
//! - [`HttpDirectoryClient`] — REST over reqwest (requires the `http` feature).
//! - [`InMemoryDirectory`] — in-process backend with a call log and failure
//!   injection, for tests and local development.
//!
//! ```ignore
//! use profile_directory::{DirectoryConfig, HttpDirectoryClient, DirectoryClient};
//!
//! let client = HttpDirectoryClient::new(&DirectoryConfig::default())?;
//! let profiles = client.list_profiles().await?;
//! ```

mod error;
#[cfg(feature = "http")]
mod http;
mod in_memory;

pub use error::ClientError;
#[cfg(feature = "http")]
pub use http::HttpDirectoryClient;
pub use in_memory::{Call, InMemoryDirectory, DEFAULT_INTERESTS};

use crate::profile::Profile;
use crate::scene::Role;

/// The backend operations the client side depends on.
#[allow(async_fn_in_trait)]
pub trait DirectoryClient {
    /// `GET /profiles`
    async fn list_profiles(&self) -> Result<Vec<Profile>, ClientError>;

    /// `GET /interests`
    async fn list_interests(&self) -> Result<Vec<String>, ClientError>;

    /// `POST /profiles` with the full record. Duplicate usernames are not
    /// distinguished from other rejections.
    async fn create_profile(&self, profile: &Profile) -> Result<(), ClientError>;

    /// `PUT /profiles?currentName=..&newName=..`
    async fn rename_profile(&self, current: &str, new_name: &str) -> Result<(), ClientError>;

    /// `DELETE /profiles?username=..`
    async fn delete_profile(&self, username: &str) -> Result<(), ClientError>;

    /// `POST /admin/role`. Advisory only.
    async fn set_role(&self, role: Role) -> Result<(), ClientError>;
}

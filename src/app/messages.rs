//! Notification texts shown for user actions.

use crate::scene::Role;

pub const CREATED: &str = "Profile created successfully!";
pub const RENAMED: &str = "Renamed successfully!";
pub const DELETED: &str = "Deleted successfully!";

pub const CREATE_FAILED: &str = "Failed to create profile";
pub const RENAME_FAILED: &str = "Failed to rename profile";
pub const DELETE_FAILED: &str = "Failed to delete profile";
pub const ROLE_SWITCH_FAILED: &str = "Failed to switch DB role";

pub fn role_switched(role: Role) -> String {
    format!("Switched database to {} mode", role)
}

//! DirectoryApp integration tests against the in-memory backend.

mod scenes;
mod edits;

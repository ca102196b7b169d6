//! HTTP client integration tests.
//!
//! Starts an axum stub of the directory backend and exercises it with the
//! reqwest-based client.

#[cfg(feature = "http")]
mod backend;
#[cfg(feature = "http")]
mod app;

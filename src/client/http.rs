//! REST transport for [`DirectoryClient`](super::DirectoryClient).
//!
//! Requires the `http` feature. Paths are resolved against
//! [`DirectoryConfig::api_base`](crate::DirectoryConfig::api_base):
//!
//! - `GET    /profiles`
//! - `GET    /interests`
//! - `POST   /profiles`                          — JSON `{username, age, interest}`
//! - `PUT    /profiles?currentName=..&newName=..`
//! - `DELETE /profiles?username=..`
//! - `POST   /admin/role`                        — JSON `{role}`
//!
//! Query parameters are form-urlencoded, so usernames containing `&`, `=`
//! or spaces survive the round trip.

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use super::{ClientError, DirectoryClient};
use crate::config::DirectoryConfig;
use crate::profile::Profile;
use crate::scene::Role;

/// Directory client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    http: Client,
    base: String,
}

impl HttpDirectoryClient {
    /// Build a client from configuration (base URL and request timeout).
    pub fn new(config: &DirectoryConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self::with_client(http, config.api_base()))
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(http: Client, api_base: &str) -> Self {
        Self {
            http,
            base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// The base URL every path is appended to.
    pub fn api_base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[derive(Serialize)]
struct RoleBody {
    role: Role,
}

impl DirectoryClient for HttpDirectoryClient {
    async fn list_profiles(&self) -> Result<Vec<Profile>, ClientError> {
        debug!(base = %self.base, "GET /profiles");
        let response = self.send(self.http.get(self.url("/profiles"))).await?;
        Ok(response.json().await?)
    }

    async fn list_interests(&self) -> Result<Vec<String>, ClientError> {
        debug!(base = %self.base, "GET /interests");
        let response = self.send(self.http.get(self.url("/interests"))).await?;
        Ok(response.json().await?)
    }

    async fn create_profile(&self, profile: &Profile) -> Result<(), ClientError> {
        debug!(username = %profile.username, "POST /profiles");
        let body = json!({
            "username": profile.username,
            "age": profile.age,
            "interest": profile.interest,
        });
        self.send(self.http.post(self.url("/profiles")).json(&body))
            .await?;
        Ok(())
    }

    async fn rename_profile(&self, current: &str, new_name: &str) -> Result<(), ClientError> {
        debug!(current, new_name, "PUT /profiles");
        let request = self
            .http
            .put(self.url("/profiles"))
            .query(&[("currentName", current), ("newName", new_name)]);
        self.send(request).await?;
        Ok(())
    }

    async fn delete_profile(&self, username: &str) -> Result<(), ClientError> {
        debug!(username, "DELETE /profiles");
        let request = self
            .http
            .delete(self.url("/profiles"))
            .query(&[("username", username)]);
        self.send(request).await?;
        Ok(())
    }

    async fn set_role(&self, role: Role) -> Result<(), ClientError> {
        debug!(%role, "POST /admin/role");
        let request = self
            .http
            .post(self.url("/admin/role"))
            .json(&RoleBody { role });
        self.send(request).await?;
        Ok(())
    }
}

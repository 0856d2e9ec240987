//! HTTP client for the CrewPlan backend API.
//!
//! Every request carries the caller's bearer token. The session guard in
//! [`crate::auth`] decides whether a token exists at all, so this module
//! never sees the logged-out case. Configuration is via environment
//! variables:
//! - `CREWPLAN_API_URL` - Base URL (default: `http://localhost:3001/api`)

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::AuthToken;
use crate::models::{CreateFeatureInput, Feature, Project, User};

/// Default URL for local development.
const DEFAULT_URL: &str = "http://localhost:3001/api";

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: session token missing or rejected")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the CrewPlan API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create client from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CREWPLAN_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        Self::new(base_url)
    }

    /// Create with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Build a request with the bearer token attached.
    fn request(&self, method: Method, path: &str, token: &AuthToken) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).bearer_auth(token.as_str())
    }

    /// Handle response, converting HTTP errors to ClientError.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }

    // ============================================================
    // Project Operations
    // ============================================================

    /// Get a project by ID.
    pub async fn get_project(
        &self,
        project_id: Uuid,
        token: &AuthToken,
    ) -> Result<Project, ClientError> {
        let response = self
            .request(Method::GET, &format!("/project/{}", project_id), token)
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // Feature Operations
    // ============================================================

    /// List all features in a project.
    pub async fn get_features(
        &self,
        project_id: Uuid,
        token: &AuthToken,
    ) -> Result<Vec<Feature>, ClientError> {
        let response = self
            .request(
                Method::GET,
                &format!("/features?project={}", project_id),
                token,
            )
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Create a feature. Returns the stored feature.
    pub async fn create_feature(
        &self,
        input: &CreateFeatureInput,
        token: &AuthToken,
    ) -> Result<Feature, ClientError> {
        let response = self
            .request(Method::POST, "/features", token)
            .json(input)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Delete a feature. The backend echoes the remaining feature list.
    pub async fn delete_feature(
        &self,
        project_id: Uuid,
        feature_id: Uuid,
        token: &AuthToken,
    ) -> Result<Vec<Feature>, ClientError> {
        let response = self
            .request(
                Method::DELETE,
                &format!("/feature/{}/{}", project_id, feature_id),
                token,
            )
            .send()
            .await?;
        self.handle_response(response).await
    }

    // ============================================================
    // User Operations
    // ============================================================

    /// Get the authenticated user, including their team members.
    pub async fn get_current_user(&self, token: &AuthToken) -> Result<User, ClientError> {
        let response = self.request(Method::GET, "/current-user", token).send().await?;
        self.handle_response(response).await
    }
}

//! REST client for the portfolio backend.
//!
//! One thin wrapper per endpoint; every operation is attempted exactly
//! once (no retries) and every failure is normalized into the closed
//! [`ApiError`] taxonomy before it leaves this module.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{
    Contact, ContactSubmission, Project, ProjectPayload, Skill, SkillPayload, Tag,
};
use crate::search::{ProjectFilter, SkillFilter};

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// HTTP client bound to one backend base URL and (optionally) one bearer
/// token. Cheap to clone; the TUI snapshots one per spawned request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>` when a token is held.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        debug!(method = %request.method(), url = %request.url(), "api request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    /// Map any non-2xx response into the error taxonomy, pulling the
    /// server's `{message}` through verbatim where one is present.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ServerMessage>()
            .await
            .ok()
            .map(|body| body.message);
        Err(match status.as_u16() {
            401 | 403 => {
                ApiError::Auth(message.unwrap_or_else(|| "Authentication required".to_string()))
            }
            code @ 400..=499 => ApiError::Validation(
                message.unwrap_or_else(|| format!("Request rejected (HTTP {code})")),
            ),
            code => ApiError::Server(code),
        })
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("invalid response body: {e}")))
    }

    async fn ok(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    // ===== Auth =====

    /// POST /login; returns the issued access token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let response: LoginResponse = self
            .json(self.http.post(self.endpoint("login")).json(&body))
            .await?;
        Ok(response.access_token)
    }

    // ===== Projects =====

    pub async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, ApiError> {
        let mut builder = self.http.get(self.endpoint("projects"));
        match filter {
            ProjectFilter::All => {}
            ProjectFilter::Featured => builder = builder.query(&[("featured", "true")]),
            ProjectFilter::Tag(name) => builder = builder.query(&[("tag", name.as_str())]),
        }
        self.json(self.authorized(builder)).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let builder = self.http.get(self.endpoint(&format!("projects/{id}")));
        self.json(self.authorized(builder)).await
    }

    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<Project, ApiError> {
        let builder = self.http.post(self.endpoint("projects")).json(payload);
        self.json(self.authorized(builder)).await
    }

    pub async fn update_project(
        &self,
        id: i64,
        payload: &ProjectPayload,
    ) -> Result<Project, ApiError> {
        let builder = self
            .http
            .put(self.endpoint(&format!("projects/{id}")))
            .json(payload);
        self.json(self.authorized(builder)).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.http.delete(self.endpoint(&format!("projects/{id}")));
        self.ok(self.authorized(builder)).await
    }

    // ===== Skills =====

    pub async fn list_skills(&self, filter: &SkillFilter) -> Result<Vec<Skill>, ApiError> {
        let mut builder = self.http.get(self.endpoint("skills"));
        if let SkillFilter::Category(category) = filter {
            builder = builder.query(&[("category", category.as_str())]);
        }
        self.json(self.authorized(builder)).await
    }

    pub async fn create_skill(&self, payload: &SkillPayload) -> Result<Skill, ApiError> {
        let builder = self.http.post(self.endpoint("skills")).json(payload);
        self.json(self.authorized(builder)).await
    }

    pub async fn update_skill(&self, id: i64, payload: &SkillPayload) -> Result<Skill, ApiError> {
        let builder = self
            .http
            .put(self.endpoint(&format!("skills/{id}")))
            .json(payload);
        self.json(self.authorized(builder)).await
    }

    pub async fn delete_skill(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.http.delete(self.endpoint(&format!("skills/{id}")));
        self.ok(self.authorized(builder)).await
    }

    // ===== Tags =====

    /// Public, read-only reference set.
    pub async fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        self.json(self.http.get(self.endpoint("tags"))).await
    }

    // ===== Contacts =====

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ApiError> {
        let builder = self.http.get(self.endpoint("contacts"));
        self.json(self.authorized(builder)).await
    }

    /// PUT /contacts/:id flips the message to read on the server.
    pub async fn mark_contact_read(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.http.put(self.endpoint(&format!("contacts/{id}")));
        self.ok(self.authorized(builder)).await
    }

    pub async fn delete_contact(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.http.delete(self.endpoint(&format!("contacts/{id}")));
        self.ok(self.authorized(builder)).await
    }

    /// Public contact form; shares the Contact shape but needs no token.
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<(), ApiError> {
        let builder = self.http.post(self.endpoint("contact")).json(submission);
        self.ok(builder).await
    }
}

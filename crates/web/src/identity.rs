use storage::dto::player::AuthUser;

use crate::error::WebError;

#[derive(serde::Deserialize)]
struct UserPayload {
    id: Option<uuid::Uuid>,
    email: Option<String>,
}

/// Resolves a caller's bearer token against the identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    user_url: String,
    anon_key: String,
}

impl IdentityClient {
    pub fn new(http: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self {
            http,
            user_url: format!("{}/auth/v1/user", base_url.trim_end_matches('/')),
            anon_key: anon_key.to_string(),
        }
    }

    /// `authorization` is the caller's raw `Authorization` header value.
    pub async fn current_user(&self, authorization: &str) -> Result<AuthUser, WebError> {
        let authorization = authorization.trim();
        if !authorization.starts_with("Bearer ") {
            return Err(WebError::Unauthorized("Not logged in".to_string()));
        }

        let response = self
            .http
            .get(&self.user_url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(|e| WebError::InternalServerError(format!("Identity lookup failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WebError::InternalServerError(format!("Identity lookup failed: {}", e)))?;

        if status.is_server_error() {
            return Err(WebError::InternalServerError(format!(
                "Identity service answered {}: {}",
                status, body
            )));
        }

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Session rejected by identity service");
            let message = if body.trim().is_empty() {
                "Invalid session".to_string()
            } else {
                body
            };
            return Err(WebError::Unauthorized(message));
        }

        let payload: Option<UserPayload> = serde_json::from_str(&body).ok();
        match payload {
            Some(UserPayload {
                id: Some(id),
                email,
            }) => Ok(AuthUser { id, email }),
            _ => Err(WebError::Unauthorized("Invalid session".to_string())),
        }
    }
}

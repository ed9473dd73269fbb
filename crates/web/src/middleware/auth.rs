use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

use crate::error::WebError;
use crate::identity::IdentityClient;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Gate for admin routes: the `x-admin-token` header must match a configured token.
pub async fn require_admin(
    State(tokens): State<AdminTokens>,
    request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let presented = request
        .headers()
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .unwrap_or_default();

    if !tokens.is_valid(presented) {
        tracing::warn!("Invalid admin token attempt");
        return Err(WebError::Unauthorized("Unauthorized".to_string()));
    }

    Ok(next.run(request).await)
}

/// Gate for signed-in routes: resolves the bearer token and stores the
/// caller's `AuthUser` in the request extensions.
pub async fn require_session(
    State(identity): State<IdentityClient>,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let user = identity.current_user(&authorization).await?;
    tracing::debug!(user_id = %user.id, "Session resolved");

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

#[derive(Debug, Clone, Default)]
pub struct AdminTokens {
    tokens: HashSet<String>,
}

impl AdminTokens {
    pub fn from_comma_separated(tokens_str: &str) -> Self {
        let tokens = tokens_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { tokens }
    }

    pub fn is_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

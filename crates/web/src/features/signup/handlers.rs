use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::dto::player::{AuthUser, JoinRequest, JoinResponse, MeResponse};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/join",
    request_body = JoinRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile created or updated", body = JoinResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not logged in")
    ),
    tag = "auth"
)]
pub async fn join(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(request) = payload?;
    if request.clean_name().is_empty() {
        return Err(WebError::BadRequest("Missing name".to_string()));
    }
    request.validate()?;

    let response = services::join(&state.service_db, &user, &request).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Signed-in user and linked player", body = MeResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "auth"
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, WebError> {
    let response = services::me(&state.service_db, user).await?;

    Ok(Json(response).into_response())
}

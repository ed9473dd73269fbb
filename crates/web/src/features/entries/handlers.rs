use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        entry::{
            DraftPickRequest, EntryResponse, ParticipateRequest, ParticipateResponse,
            SubmitScoreRequest,
        },
        player::AuthUser,
    },
    models::Player,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

const NO_LINKED_PLAYER: &str =
    "No player linked to this login yet. Go to Sign Up and create your profile.";

async fn require_player(db: &Database, user: &AuthUser) -> WebResult<Player> {
    services::linked_player(db, user.id)
        .await?
        .ok_or_else(|| WebError::Forbidden(NO_LINKED_PLAYER.to_string()))
}

#[utoipa::path(
    post,
    path = "/api/mutate/participate",
    request_body = ParticipateRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Joined or left the week", body = ParticipateResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "No player linked to this login")
    ),
    tag = "entries"
)]
pub async fn participate(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<ParticipateRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(request) = payload?;
    let player = require_player(&state.service_db, &user).await?;

    let response = services::set_participation(
        &state.service_db,
        request.week_id,
        player.id,
        request.wants_in(),
    )
    .await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/mutate/submit-score",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = EntryResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "entries"
)]
pub async fn submit_score(
    State(state): State<AppState>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(request) = payload?;
    request.validate()?;

    let response = services::submit_score(&state.service_db, request).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/mutate/draft-pick",
    request_body = DraftPickRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Pick recorded", body = EntryResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Not logged in"),
        (status = 403, description = "No player linked to this login")
    ),
    tag = "entries"
)]
pub async fn draft_pick(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<DraftPickRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(request) = payload?;
    request.validate()?;

    let player = require_player(&state.service_db, &user).await?;

    let response =
        services::draft_pick(&state.service_db, request.week_id, player.id, request.pro_id)
            .await?;

    Ok(Json(response).into_response())
}

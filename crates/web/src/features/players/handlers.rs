use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::player::PlayerSummary;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "List all players", body = Vec<PlayerSummary>)
    ),
    tag = "players"
)]
pub async fn list_players(State(state): State<AppState>) -> Result<Response, WebError> {
    let players = services::list_players(&state.db).await?;

    Ok(Json(players).into_response())
}

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::dto::leaderboard::{LeaderboardQuery, LeaderboardResponse, StandingsResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Weekly leaderboard; empty with a null week when nothing is scheduled", body = LeaderboardResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;

    let response =
        services::weekly_leaderboard(&state.db, query.week_id, state.clock.now()).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/season-standings",
    responses(
        (status = 200, description = "Season points table", body = StandingsResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_season_standings(State(state): State<AppState>) -> Result<Response, WebError> {
    let rows = services::season_standings(&state.db).await?;

    Ok(Json(StandingsResponse { rows }).into_response())
}

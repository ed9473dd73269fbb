use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::schedule::{CurrentWeekResponse, ScheduleResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/schedule",
    responses(
        (status = 200, description = "Season schedule", body = ScheduleResponse)
    ),
    tag = "schedule"
)]
pub async fn get_schedule(State(state): State<AppState>) -> Result<Response, WebError> {
    let weeks = services::list_schedule(&state.db).await?;

    Ok(Json(ScheduleResponse { weeks }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/current-week",
    responses(
        (status = 200, description = "Current week, null when no week is scheduled", body = CurrentWeekResponse)
    ),
    tag = "schedule"
)]
pub async fn get_current_week(State(state): State<AppState>) -> Result<Response, WebError> {
    let week = services::current_week(&state.db, state.clock.now()).await?;

    Ok(Json(CurrentWeekResponse { week }).into_response())
}

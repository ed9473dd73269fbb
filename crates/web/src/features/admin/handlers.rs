use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::dto::admin::{AwardWeekQuery, AwardWeekResponse, RecalcResponse, ResetWeekResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/reset-week",
    security(
        ("admin_token" = [])
    ),
    responses(
        (status = 200, description = "Entries of the current week removed", body = ResetWeekResponse),
        (status = 400, description = "No scheduled weeks exist"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn reset_week(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::reset_week(&state.service_db, state.clock.now()).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/recalc",
    security(
        ("admin_token" = [])
    ),
    responses(
        (status = 200, description = "Totals of the current week recomputed", body = RecalcResponse),
        (status = 400, description = "No scheduled weeks exist"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "admin"
)]
pub async fn recalc(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::recalc(&state.service_db, state.clock.now()).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/mutate/award-week-points",
    params(AwardWeekQuery),
    security(
        ("admin_token" = [])
    ),
    responses(
        (status = 200, description = "Week winner recorded", body = AwardWeekResponse),
        (status = 400, description = "No scheduled weeks exist"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Week not found")
    ),
    tag = "admin"
)]
pub async fn award_week_points(
    State(state): State<AppState>,
    query: Result<Query<AwardWeekQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;

    let response =
        services::award_week(&state.service_db, query.week_id, state.clock.now()).await?;

    Ok(Json(response).into_response())
}

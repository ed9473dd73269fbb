use axum::{
    Json,
    extract::{Query, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use storage::{
    dto::pro::{ProScoreQuery, ProScoreResponse},
    models::Pro,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/pros",
    responses(
        (status = 200, description = "Pros available for drafting", body = Vec<Pro>)
    ),
    tag = "pros"
)]
pub async fn list_pros() -> Response {
    Json(services::list_pros()).into_response()
}

#[utoipa::path(
    get,
    path = "/api/proscore",
    params(ProScoreQuery),
    responses(
        (status = 200, description = "Score of a pro relative to par", body = ProScoreResponse)
    ),
    tag = "pros"
)]
pub async fn get_pro_score(
    query: Result<Query<ProScoreQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;

    Ok(Json(services::pro_score(query.pro_id)).into_response())
}

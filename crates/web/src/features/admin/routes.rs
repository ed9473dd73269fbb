use axum::{Router, middleware, routing::post};

use super::handlers::{award_week_points, recalc, reset_week};
use crate::middleware::auth::require_admin;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/reset-week", post(reset_week))
        .route("/recalc", post(recalc))
        .route_layer(middleware::from_fn_with_state(
            state.admin_tokens.clone(),
            require_admin,
        ))
}

/// Admin operations mounted under `/mutate`
pub fn mutate_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/award-week-points", post(award_week_points))
        .route_layer(middleware::from_fn_with_state(
            state.admin_tokens.clone(),
            require_admin,
        ))
}

use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{join, me};
use crate::middleware::auth::require_session;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/join", post(join))
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.identity.clone(),
            require_session,
        ))
}

/// `/me` mounted directly under `/api` for clients that never moved to `/auth/me`
pub fn me_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(
            state.identity.clone(),
            require_session,
        ))
}

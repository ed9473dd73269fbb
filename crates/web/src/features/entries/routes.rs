use axum::{Router, middleware, routing::post};

use super::handlers::{draft_pick, participate, submit_score};
use crate::middleware::auth::require_session;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let signed_in = Router::new()
        .route("/participate", post(participate))
        .route("/draft-pick", post(draft_pick))
        .route_layer(middleware::from_fn_with_state(
            state.identity.clone(),
            require_session,
        ));

    Router::new()
        .route("/submit-score", post(submit_score))
        .merge(signed_in)
}

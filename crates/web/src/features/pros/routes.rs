use axum::{Router, routing::get};

use super::handlers::{get_pro_score, list_pros};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pros", get(list_pros))
        .route("/proscore", get(get_pro_score))
}

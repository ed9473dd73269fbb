use axum::{Router, routing::get};

use super::handlers::{get_current_week, get_schedule};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/schedule", get(get_schedule))
        .route("/current-week", get(get_current_week))
}

use axum::{Router, routing::get};

use super::handlers::{get_leaderboard, get_season_standings};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(get_leaderboard))
        .route("/season-standings", get(get_season_standings))
}

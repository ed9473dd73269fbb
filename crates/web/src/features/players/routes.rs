use axum::{Router, routing::get};

use super::handlers::list_players;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/players", get(list_players))
}

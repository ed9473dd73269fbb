use axum::{
    Json, Router,
    http::{HeaderName, Method, header},
    routing::get,
};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::WebError;
use crate::features::{admin, entries, leaderboard, players, pros, schedule, signup};
use crate::middleware::auth::ADMIN_TOKEN_HEADER;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let mutate = entries::routes::routes(&state).merge(admin::routes::mutate_routes(&state));

    let api = Router::new()
        .route("/health", get(health))
        .merge(schedule::routes::routes())
        .merge(leaderboard::routes::routes())
        .merge(players::routes::routes())
        .merge(pros::routes::routes())
        .merge(signup::routes::me_routes(&state))
        .nest("/auth", signup::routes::routes(&state))
        .nest("/mutate", mutate)
        .nest("/admin", admin::routes::routes(&state));

    Router::new()
        .route("/", get(health))
        .nest("/api", api)
        .fallback(not_found)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(ADMIN_TOKEN_HEADER),
        ])
}

async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn not_found() -> WebError {
    WebError::NotFound
}

use anyhow::Context;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod identity;
mod middleware;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::schedule::handlers::get_schedule,
        features::schedule::handlers::get_current_week,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::get_season_standings,
        features::players::handlers::list_players,
        features::pros::handlers::list_pros,
        features::pros::handlers::get_pro_score,
        features::signup::handlers::join,
        features::signup::handlers::me,
        features::entries::handlers::participate,
        features::entries::handlers::submit_score,
        features::entries::handlers::draft_pick,
        features::admin::handlers::reset_week,
        features::admin::handlers::recalc,
        features::admin::handlers::award_week_points,
    ),
    components(
        schemas(
            storage::dto::schedule::ScheduleResponse,
            storage::dto::schedule::CurrentWeekResponse,
            storage::dto::leaderboard::LeaderboardRow,
            storage::dto::leaderboard::LeaderboardResponse,
            storage::dto::leaderboard::StandingsResponse,
            storage::dto::player::PlayerSummary,
            storage::dto::player::JoinRequest,
            storage::dto::player::JoinMode,
            storage::dto::player::JoinResponse,
            storage::dto::player::AuthUser,
            storage::dto::player::MeResponse,
            storage::dto::entry::SubmitScoreRequest,
            storage::dto::entry::DraftPickRequest,
            storage::dto::entry::ParticipateRequest,
            storage::dto::entry::ParticipateMode,
            storage::dto::entry::ParticipateResponse,
            storage::dto::entry::EntryResponse,
            storage::dto::admin::ResetWeekResponse,
            storage::dto::admin::RecalcResponse,
            storage::dto::admin::AwardWeekResponse,
            storage::dto::pro::ProScoreResponse,
            storage::models::Week,
            storage::models::Player,
            storage::models::WeekEntry,
            storage::models::WeekParticipant,
            storage::models::SeasonStanding,
            storage::models::Pro,
        )
    ),
    tags(
        (name = "schedule", description = "Season schedule and current week"),
        (name = "leaderboard", description = "Weekly leaderboard and season standings"),
        (name = "players", description = "Pool members"),
        (name = "pros", description = "Draftable pros and their scores"),
        (name = "auth", description = "Self-service profile endpoints"),
        (name = "entries", description = "Scores, picks and week participation"),
        (name = "admin", description = "Admin-token protected operations"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{
            ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme,
        };

        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "admin_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(
                    middleware::auth::ADMIN_TOKEN_HEADER,
                ))),
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Fairway Pool API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Using data store at {} (season time zone {})",
        config.supabase_url,
        config.season_timezone.name()
    );
    let state = AppState::from_config(&config).context("Failed to initialize application state")?;

    let app = routes::router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}

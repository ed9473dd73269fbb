use chrono::NaiveDateTime;
use storage::{
    Database,
    dto::leaderboard::{LeaderboardResponse, LeaderboardRow},
    error::Result,
    models::SeasonStanding,
    repository::{
        entry::EntryRepository, player::PlayerRepository, standing::StandingRepository,
        week::WeekRepository,
    },
    services::leaderboard::build_leaderboard,
};
use uuid::Uuid;

use crate::features::schedule::services::current_week;

/// Leaderboard of the requested week, or of the current one when none is given.
/// An unknown week or an empty schedule yields an empty board.
pub async fn weekly_leaderboard(
    db: &Database,
    week_id: Option<Uuid>,
    now: NaiveDateTime,
) -> Result<LeaderboardResponse> {
    let week = match week_id {
        Some(id) => WeekRepository::new(db).find_by_id(id).await?,
        None => current_week(db, now).await?,
    };

    let Some(week) = week else {
        return Ok(LeaderboardResponse::empty());
    };

    let rows = ranked_rows(db, week.id).await?;

    Ok(LeaderboardResponse {
        week: Some(week.display_label()),
        week_id: Some(week.id),
        rows,
    })
}

/// Whole roster ranked by the week's combined scores
pub async fn ranked_rows(db: &Database, week_id: Uuid) -> Result<Vec<LeaderboardRow>> {
    let player_repo = PlayerRepository::new(db);
    let entry_repo = EntryRepository::new(db);

    let (players, entries) =
        tokio::try_join!(player_repo.list(), entry_repo.list_for_week(week_id))?;

    Ok(build_leaderboard(&players, &entries))
}

pub async fn season_standings(db: &Database) -> Result<Vec<SeasonStanding>> {
    let repo = StandingRepository::new(db);
    repo.list().await
}

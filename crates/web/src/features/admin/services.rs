use chrono::NaiveDateTime;
use storage::{
    Database,
    dto::admin::{AwardWeekResponse, RecalcResponse, ResetWeekResponse},
    models::{Week, WeekEntry, week_entry::combined_total},
    repository::{entry::EntryRepository, week::WeekRepository},
    services::leaderboard::leader,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::features::{leaderboard::services::ranked_rows, schedule::services::current_week};

async fn require_current_week(db: &Database, now: NaiveDateTime) -> WebResult<Week> {
    current_week(db, now)
        .await?
        .ok_or_else(|| WebError::BadRequest("No scheduled weeks exist".to_string()))
}

/// Remove every entry of the current week
pub async fn reset_week(db: &Database, now: NaiveDateTime) -> WebResult<ResetWeekResponse> {
    let week = require_current_week(db, now).await?;

    let deleted = EntryRepository::new(db).delete_for_week(week.id).await?;
    tracing::info!(week_id = %week.id, deleted, "Week reset");

    Ok(ResetWeekResponse {
        ok: true,
        week_id: week.id,
        deleted,
    })
}

/// Rewrite the stored total of every current-week entry whose total no
/// longer matches its components
pub async fn recalc(db: &Database, now: NaiveDateTime) -> WebResult<RecalcResponse> {
    let week = require_current_week(db, now).await?;
    let repo = EntryRepository::new(db);

    let entries = repo.list_for_week(week.id).await?;
    let mut updated = 0;

    for entry in &entries {
        let expected = expected_total(entry);
        if entry.total == expected {
            continue;
        }

        repo.set_total(week.id, entry.player_id, expected).await?;
        updated += 1;
    }

    tracing::info!(week_id = %week.id, updated, "Week totals recalculated");

    Ok(RecalcResponse {
        ok: true,
        week_id: week.id,
        updated,
    })
}

/// Record the leader of a week as its winner
pub async fn award_week(
    db: &Database,
    week_id: Option<Uuid>,
    now: NaiveDateTime,
) -> WebResult<AwardWeekResponse> {
    let weeks = WeekRepository::new(db);

    let week = match week_id {
        Some(id) => weeks.find_by_id(id).await?.ok_or(WebError::NotFound)?,
        None => require_current_week(db, now).await?,
    };

    let rows = ranked_rows(db, week.id).await?;
    let winner = leader(&rows).map(|row| row.player_name.clone());

    weeks.set_winner(week.id, winner.as_deref()).await?;
    tracing::info!(week_id = %week.id, winner = ?winner, "Week awarded");

    Ok(AwardWeekResponse {
        ok: true,
        week_id: week.id,
        winner,
    })
}

fn expected_total(entry: &WeekEntry) -> Option<i32> {
    entry
        .your_score
        .and_then(|own| combined_total(own, entry.pro_score))
}

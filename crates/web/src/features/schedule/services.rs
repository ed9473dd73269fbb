use chrono::NaiveDateTime;
use storage::{
    Database, error::Result, models::Week, repository::week::WeekRepository,
    services::current_week::resolve_current_week,
};

/// Full schedule, numbered weeks first
pub async fn list_schedule(db: &Database) -> Result<Vec<Week>> {
    let repo = WeekRepository::new(db);
    repo.list_schedule().await
}

/// Week the schedule's date ranges point at for `now`; `None` when nothing is scheduled
pub async fn current_week(db: &Database, now: NaiveDateTime) -> Result<Option<Week>> {
    let repo = WeekRepository::new(db);
    let weeks = repo.list_scheduled().await?;

    Ok(resolve_current_week(&weeks, now).cloned())
}

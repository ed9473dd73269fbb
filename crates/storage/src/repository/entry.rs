use uuid::Uuid;

use crate::Database;
use crate::dto::entry::{DraftPickUpsert, ScoreUpsert, TotalPatch};
use crate::error::Result;
use crate::models::WeekEntry;
use crate::query::RestQuery;

const ENTRY_COLUMNS: &str = "week_id,player_id,your_score,pro_score,total,pga_golfer";
const ENTRY_KEY: &str = "week_id,player_id";

pub struct EntryRepository<'a> {
    db: &'a Database,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list_for_week(&self, week_id: Uuid) -> Result<Vec<WeekEntry>> {
        let query = RestQuery::table("week_entries")
            .select(ENTRY_COLUMNS)
            .eq("week_id", week_id);

        self.db.fetch(&query).await
    }

    /// Insert or overwrite the score row of one (week, player) pair
    pub async fn upsert_score(&self, row: &ScoreUpsert) -> Result<Option<WeekEntry>> {
        let rows: Vec<WeekEntry> = self.db.upsert(&Self::upsert_query(), row).await?;
        Ok(rows.into_iter().next())
    }

    /// Record a draft pick, keeping any scores already on the row
    pub async fn upsert_pick(&self, row: &DraftPickUpsert) -> Result<Option<WeekEntry>> {
        let rows: Vec<WeekEntry> = self.db.upsert(&Self::upsert_query(), row).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn set_total(&self, week_id: Uuid, player_id: Uuid, total: Option<i32>) -> Result<()> {
        let query = RestQuery::table("week_entries")
            .eq("week_id", week_id)
            .eq("player_id", player_id);

        let _: Vec<WeekEntry> = self.db.update(&query, &TotalPatch { total }).await?;
        Ok(())
    }

    pub async fn delete_for_week(&self, week_id: Uuid) -> Result<usize> {
        let query = RestQuery::table("week_entries").eq("week_id", week_id);
        self.db.delete(&query).await
    }

    fn upsert_query() -> RestQuery {
        RestQuery::table("week_entries").on_conflict(ENTRY_KEY)
    }
}

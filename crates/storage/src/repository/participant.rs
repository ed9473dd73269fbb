use uuid::Uuid;

use crate::Database;
use crate::error::Result;
use crate::models::WeekParticipant;
use crate::query::RestQuery;

pub struct ParticipantRepository<'a> {
    db: &'a Database,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn join(&self, week_id: Uuid, player_id: Uuid) -> Result<Option<WeekParticipant>> {
        let query = RestQuery::table("week_participants").on_conflict("week_id,player_id");
        let row = WeekParticipant { week_id, player_id };

        let rows: Vec<WeekParticipant> = self.db.upsert(&query, &row).await?;
        Ok(rows.into_iter().next())
    }

    pub async fn leave(&self, week_id: Uuid, player_id: Uuid) -> Result<usize> {
        let query = RestQuery::table("week_participants")
            .eq("week_id", week_id)
            .eq("player_id", player_id);

        self.db.delete(&query).await
    }
}
